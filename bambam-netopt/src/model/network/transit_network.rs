use super::{DistanceTable, GeoLookup, TransitGraph};
use crate::model::NetoptError;
use itertools::Itertools;

/// the collaborator inputs of a line search: the base graph, stop
/// coordinates and the distance table.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    pub graph: TransitGraph,
    pub geo: GeoLookup,
    pub distances: DistanceTable,
}

impl TransitNetwork {
    /// builds a network, confirming the distance table covers every stop of
    /// the graph. stops without coordinates are tolerated here; they fail
    /// individually when a candidate needs them.
    pub fn try_new(
        graph: TransitGraph,
        geo: GeoLookup,
        distances: DistanceTable,
    ) -> Result<TransitNetwork, NetoptError> {
        let missing_distances = graph
            .sorted_stops()
            .into_iter()
            .filter(|s| !distances.contains_stop(s))
            .collect_vec();
        if graph.n_stops() > 1 && !missing_distances.is_empty() {
            let listing = missing_distances.iter().take(5).join(", ");
            return Err(NetoptError::InvalidInput(format!(
                "distance table is missing {} stops of the graph, e.g. {listing}",
                missing_distances.len()
            )));
        }
        let missing_geo = graph.stops().filter(|s| !geo.contains_key(s)).count();
        if missing_geo > 0 {
            log::warn!("{missing_geo} stops of the graph have no coordinates");
        }
        Ok(TransitNetwork {
            graph,
            geo,
            distances,
        })
    }

    /// builds a network whose distance table is derived from the stop
    /// coordinates.
    pub fn from_geo(graph: TransitGraph, geo: GeoLookup) -> Result<TransitNetwork, NetoptError> {
        let distances = DistanceTable::from_geo_lookup(&geo);
        TransitNetwork::try_new(graph, geo, distances)
    }
}
