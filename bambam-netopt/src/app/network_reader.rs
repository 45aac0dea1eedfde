use crate::model::{
    network::{
        DistanceTable, EdgeRecord, GeoLookup, StopId, StopLocation, TransitGraph, TransitNetwork,
    },
    NetoptCliError,
};
use flate2::read::GzDecoder;
use kdam::tqdm;
use serde::{de::DeserializeOwned, Deserialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

#[derive(Debug, Deserialize)]
struct StopRow {
    stop_id: StopId,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct DistanceRow {
    src: StopId,
    dst: StopId,
    distance_km: f64,
}

/// reads a network from its stops and edges files. without a distances
/// file, distances are the great-circle distances between stop coordinates.
pub fn read_network(
    stops_file: &Path,
    edges_file: &Path,
    distances_file: Option<&Path>,
) -> Result<TransitNetwork, NetoptCliError> {
    let geo = read_stops(stops_file)?;
    let records = read_edges(edges_file)?;
    let graph = TransitGraph::from_records(records);
    log::info!(
        "read network with {} stops and {} edges",
        graph.n_stops(),
        graph.n_edges()
    );
    let network = match distances_file {
        Some(f) => TransitNetwork::try_new(graph, geo, read_distances(f)?)?,
        None => TransitNetwork::from_geo(graph, geo)?,
    };
    Ok(network)
}

/// reads `stop_id,lat,lon` rows. a repeated stop keeps its last location.
pub fn read_stops(path: &Path) -> Result<GeoLookup, NetoptCliError> {
    let rows: Vec<StopRow> = read_rows(path, "read stops")?;
    let mut geo = GeoLookup::new();
    for row in rows {
        if geo
            .insert(row.stop_id.clone(), StopLocation::new(row.lat, row.lon))
            .is_some()
        {
            log::warn!("stop '{}' appears more than once in {path:?}", row.stop_id);
        }
    }
    Ok(geo)
}

/// reads `src,dst,mode,length` rows, with mode `transit` or `walk` and
/// length in seconds.
pub fn read_edges(path: &Path) -> Result<Vec<EdgeRecord>, NetoptCliError> {
    let records: Vec<EdgeRecord> = read_rows(path, "read edges")?;
    if let Some(bad) = records.iter().find(|r| r.length.is_nan() || r.length < 0.0) {
        return Err(NetoptCliError::InputError(format!(
            "edge {} -> {} in {path:?} has invalid length {}",
            bad.src, bad.dst, bad.length
        )));
    }
    Ok(records)
}

/// reads `src,dst,distance_km` rows into a symmetric table.
pub fn read_distances(path: &Path) -> Result<DistanceTable, NetoptCliError> {
    let rows: Vec<DistanceRow> = read_rows(path, "read distances")?;
    let mut table = DistanceTable::new();
    for row in rows {
        table.insert(&row.src, &row.dst, row.distance_km);
    }
    Ok(table)
}

fn read_rows<T: DeserializeOwned>(
    path: &Path,
    desc: &'static str,
) -> Result<Vec<T>, NetoptCliError> {
    let filename = path.to_string_lossy().to_string();
    let f = File::open(path)
        .map_err(|e| NetoptCliError::InputError(format!("failed opening {filename}: {e}")))?;
    let r: Box<dyn Read> = if filename.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(f)
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(r);
    let row_iter = tqdm!(reader.deserialize::<T>(), desc = desc);
    let mut rows = vec![];
    for row in row_iter {
        rows.push(row.map_err(|e| NetoptCliError::CsvError(filename.clone(), e))?);
    }
    eprintln!();
    Ok(rows)
}
