use crate::model::network::{
    EdgeMode, GeoLookup, ModeSpeeds, StopId, StopLocation, TransitGraph, TransitNetwork,
};

/// stops of the cross network as (id, lon, lat).
const CROSS_STOPS: [(&str, f64, f64); 9] = [
    ("A - West", 2.20, 48.85),
    ("A - Center", 2.35, 48.85),
    ("A - East", 2.50, 48.85),
    ("4 - North", 2.36, 48.98),
    ("4 - Porte", 2.45, 48.98),
    ("4 - South", 2.36, 48.72),
    ("4 - Gare", 2.45, 48.72),
    ("7 - Center", 2.35, 48.85),
    ("7 - Sud", 2.20, 48.70),
];

pub fn stop(id: &str) -> StopId {
    StopId::from(id)
}

pub fn cross_speeds() -> ModeSpeeds {
    ModeSpeeds {
        rer_kmh: 50.0,
        metro_kmh: 30.0,
        tram_kmh: 20.0,
        walk_kmh: None,
        transfer_time_seconds: 120.0,
    }
}

/// a small network around a central interchange:
///
/// * RER line A runs west to east through "A - Center"
/// * two disconnected metro 4 segments lie north and south of line A
/// * metro 7 leaves "7 - Center" to the south west
/// * "A - Center" and "7 - Center" form a hub joined by a 120 s walk
pub fn cross_network() -> TransitNetwork {
    let geo: GeoLookup = CROSS_STOPS
        .iter()
        .map(|(id, lon, lat)| (stop(id), StopLocation::new(*lat, *lon)))
        .collect();
    let speeds = cross_speeds();
    let mut graph = TransitGraph::empty();
    let mut link = |a: &str, b: &str, speed_kmh: f64| {
        let km = geo[&stop(a)].haversine_km(&geo[&stop(b)]);
        graph.add_bidirectional_edge(&stop(a), &stop(b), EdgeMode::Transit, km / speed_kmh * 3600.0);
    };
    link("A - West", "A - Center", speeds.rer_kmh);
    link("A - Center", "A - East", speeds.rer_kmh);
    link("4 - North", "4 - Porte", speeds.metro_kmh);
    link("4 - South", "4 - Gare", speeds.metro_kmh);
    link("7 - Center", "7 - Sud", speeds.metro_kmh);
    graph.add_bidirectional_edge(
        &stop("A - Center"),
        &stop("7 - Center"),
        EdgeMode::Walk,
        speeds.transfer_time_seconds,
    );
    match TransitNetwork::from_geo(graph, geo) {
        Ok(network) => network,
        Err(e) => panic!("cross network fixture is invalid: {e}"),
    }
}

/// a unique scratch directory under the system temp dir.
pub fn scratch_directory(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("bambam-netopt-{}-{}", name, std::process::id()));
    if dir.exists() {
        let _ = std::fs::remove_dir_all(&dir);
    }
    if let Err(e) = std::fs::create_dir_all(&dir) {
        panic!("unable to create scratch directory {dir:?}: {e}");
    }
    dir
}
