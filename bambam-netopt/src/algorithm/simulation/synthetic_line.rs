use crate::algorithm::routing::ResolvedRoute;
use crate::model::network::{
    DistanceLookup, DistanceOverlay, DistanceTable, EdgeMode, LineMode, ModeSpeeds, StopId,
    TransitGraph, STOP_NAME_SEPARATOR,
};
use crate::model::NetoptError;
use itertools::Itertools;
use std::collections::HashSet;

/// a new line materialized in a working graph: one synthetic stop per route
/// stop, chained by transit edges and linked to the existing stops by
/// walking transfers. must be rolled back before the graph is reused.
#[derive(Debug, Clone)]
pub struct SyntheticLine {
    /// synthetic stops in route order
    pub stops: Vec<StopId>,
    /// existing stop each synthetic stop stands in for
    pub originals: Vec<StopId>,
}

impl SyntheticLine {
    /// adds the line for `route` to `graph`. edge weights are computed before
    /// the graph is modified, so on error the graph is left untouched.
    ///
    /// # Arguments
    ///
    /// * `graph` - working graph to extend
    /// * `route` - existing stops served by the line, in order
    /// * `mode` - line mode, which names the stops and sets the line speed
    /// * `speeds` - line speeds and the transfer time for walking links
    /// * `distances` - distances between the existing stops
    pub fn build<D: DistanceLookup>(
        graph: &mut TransitGraph,
        route: &ResolvedRoute,
        mode: LineMode,
        speeds: &ModeSpeeds,
        distances: &D,
    ) -> Result<SyntheticLine, NetoptError> {
        let speed_kmh = speeds.speed_kmh(mode);
        if speed_kmh <= 0.0 {
            return Err(NetoptError::InvalidInput(format!(
                "speed of mode {mode} must be positive, found {speed_kmh}"
            )));
        }
        let segment_times = route
            .stops
            .iter()
            .tuple_windows()
            .map(|(a, b)| -> Result<f64, NetoptError> {
                let dist_km = distances.distance_km(a, b)?;
                Ok((dist_km / speed_kmh) * 3600.0)
            })
            .collect::<Result<Vec<f64>, NetoptError>>()?;

        let mut taken: HashSet<StopId> = HashSet::new();
        let stops = route
            .stops
            .iter()
            .map(|original| {
                let name = synthetic_stop_name(mode, original, graph, &taken);
                taken.insert(name.clone());
                name
            })
            .collect_vec();

        for stop in stops.iter() {
            graph.add_stop(stop);
        }
        for ((a, b), time) in stops.iter().tuple_windows().zip(segment_times) {
            graph.add_bidirectional_edge(a, b, EdgeMode::Transit, time);
        }
        let transfer = speeds.transfer_time_seconds;
        for (stop, original) in stops.iter().zip(route.stops.iter()) {
            graph.add_bidirectional_edge(stop, original, EdgeMode::Walk, transfer);
            let hub_mates = match route.hub_adjacency.get(original) {
                Some(mates) => mates.clone(),
                None => graph.walk_neighbors(original),
            };
            for mate in hub_mates.iter().filter(|m| !taken.contains(*m)) {
                graph.add_bidirectional_edge(stop, mate, EdgeMode::Walk, transfer);
            }
        }

        Ok(SyntheticLine {
            stops,
            originals: route.stops.clone(),
        })
    }

    /// distance view where each synthetic stop shares its original's location.
    pub fn distance_overlay<'a>(&self, base: &'a DistanceTable) -> DistanceOverlay<'a> {
        let mut overlay = DistanceOverlay::new(base);
        for (stop, original) in self.stops.iter().zip(self.originals.iter()) {
            overlay.insert_alias(stop.clone(), original.clone());
        }
        overlay
    }

    /// removes every synthetic stop and its edges. all stops are removed even
    /// if one of them fails, and the first failure is reported.
    pub fn rollback(self, graph: &mut TransitGraph) -> Result<(), NetoptError> {
        let mut first_error = None;
        for stop in self.stops.iter() {
            if let Err(e) = graph.remove_stop(stop) {
                log::error!("failed to remove synthetic stop '{stop}': {e}");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}

/// `<mode>_new - <place name>`, with a numeric suffix when that name is
/// already a stop of the graph or of the line being built.
fn synthetic_stop_name(
    mode: LineMode,
    original: &StopId,
    graph: &TransitGraph,
    taken: &HashSet<StopId>,
) -> StopId {
    let base = format!(
        "{}_new{}{}",
        mode.as_str(),
        STOP_NAME_SEPARATOR,
        original.place_name()
    );
    let is_free = |name: &StopId| !graph.contains_stop(name) && !taken.contains(name);
    let candidate = StopId::new(base.clone());
    if is_free(&candidate) {
        return candidate;
    }
    (2..)
        .map(|i| StopId::new(format!("{base} ({i})")))
        .find(is_free)
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::routing::resolve_route;
    use crate::test_util::{cross_network, cross_speeds, stop};

    #[test]
    fn test_build_then_rollback_restores_graph() {
        let network = cross_network();
        let mut graph = network.graph.clone();
        let route = resolve_route(
            &stop("4 - North"),
            &stop("4 - South"),
            &graph,
            &network.distances,
            &network.geo,
        )
        .unwrap();
        let speeds = cross_speeds();
        let line =
            SyntheticLine::build(&mut graph, &route, LineMode::Tram, &speeds, &network.distances)
                .unwrap();

        assert_eq!(
            line.stops,
            vec![
                stop("tram_new - North"),
                stop("tram_new - Center"),
                stop("tram_new - South"),
            ]
        );
        assert_eq!(graph.n_stops(), network.graph.n_stops() + 3);
        // two transit segments both ways, walks to the 3 originals plus the
        // hub-mate "7 - Center", both ways
        assert_eq!(graph.n_edges(), network.graph.n_edges() + 4 + 8);

        let center = stop("tram_new - Center");
        assert_eq!(
            graph.walk_neighbors(&center).into_iter().collect_vec(),
            vec![stop("7 - Center"), stop("A - Center")]
        );
        let expected = network
            .distances
            .distance_km(&stop("4 - North"), &stop("A - Center"))
            .unwrap()
            / speeds.tram_kmh
            * 3600.0;
        let north_edge = graph
            .out_edges(&stop("tram_new - North"))
            .iter()
            .find(|e| e.dst == center)
            .unwrap();
        assert!((north_edge.length - expected).abs() < 1e-9);

        let overlay = line.distance_overlay(&network.distances);
        assert_eq!(overlay.distance_km(&center, &stop("A - Center")).unwrap(), 0.0);

        line.rollback(&mut graph).unwrap();
        assert_eq!(graph, network.graph);
    }

    #[test]
    fn test_synthetic_names_are_unique() {
        let mut graph = TransitGraph::empty();
        graph.add_stop(&stop("metro_new - Gare"));
        let taken = HashSet::from([stop("metro_new - Gare (2)")]);
        let name = synthetic_stop_name(LineMode::Metro, &stop("4 - Gare"), &graph, &taken);
        assert_eq!(name, stop("metro_new - Gare (3)"));
        let rer = synthetic_stop_name(LineMode::Rer, &stop("4 - Gare"), &graph, &taken);
        assert_eq!(rer, stop("RER_new - Gare"));
    }
}
