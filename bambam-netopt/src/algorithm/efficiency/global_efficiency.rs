use crate::algorithm::{shortest_path::DenseGraph, walk_hubs};
use crate::model::network::{DistanceLookup, TransitGraph};
use crate::model::NetoptError;
use rayon::prelude::*;
use serde::Serialize;

/// result of a global efficiency computation. the normalization terms are
/// returned so that they can be reused for every variant of the same base
/// network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalEfficiency {
    /// raw efficiency over ideal efficiency, in [0, 1] for realistic networks
    pub score: f64,
    pub ideal_efficiency: f64,
    /// number of ordered stop pairs once every hub counts as a single stop
    pub denom: usize,
}

impl GlobalEfficiency {
    fn degenerate(ideal_efficiency: f64, denom: usize) -> GlobalEfficiency {
        GlobalEfficiency {
            score: 0.0,
            ideal_efficiency,
            denom,
        }
    }
}

/// `n * (n - 1)` where `n` counts stops after collapsing each hub into one.
pub fn hub_collapsed_denominator(graph: &TransitGraph) -> usize {
    let n_hubs = walk_hubs(graph).len();
    n_hubs * n_hubs.saturating_sub(1)
}

/// computes the global efficiency of a network: the mean of the inverse
/// shortest travel time over all ordered stop pairs, normalized by the same
/// mean in an idealized network where every pair is linked in a straight line
/// at the reference speed.
///
/// # Arguments
///
/// * `graph` - network to score. edge lengths are travel times in seconds
/// * `distances` - distances in kilometers between every pair of stops
/// * `reference_speed_kmh` - speed of the idealized network
/// * `ideal_efficiency` - cached ideal efficiency of the base network, if known
/// * `denom` - cached hub-collapsed pair count of the base network, if known
///
/// # Returns
///
/// The normalized score, with the ideal efficiency and pair count that were
/// used. A network with fewer than two logical stops, or one where all stops
/// are co-located, scores 0.
pub fn global_efficiency<D: DistanceLookup + Sync>(
    graph: &TransitGraph,
    distances: &D,
    reference_speed_kmh: f64,
    ideal_efficiency: Option<f64>,
    denom: Option<usize>,
) -> Result<GlobalEfficiency, NetoptError> {
    let denom = denom.unwrap_or_else(|| hub_collapsed_denominator(graph));
    if denom == 0 {
        log::debug!("network has fewer than two logical stops, efficiency is 0");
        return Ok(GlobalEfficiency::degenerate(
            ideal_efficiency.unwrap_or(0.0),
            denom,
        ));
    }
    let ideal_efficiency = match ideal_efficiency {
        Some(ideal) => ideal,
        None => compute_ideal_efficiency(graph, distances, reference_speed_kmh, denom)?,
    };
    if ideal_efficiency == 0.0 {
        log::debug!("ideal efficiency is 0 (all stops co-located), efficiency is 0");
        return Ok(GlobalEfficiency::degenerate(ideal_efficiency, denom));
    }

    let raw = raw_efficiency(graph, denom);
    Ok(GlobalEfficiency {
        score: raw / ideal_efficiency,
        ideal_efficiency,
        denom,
    })
}

/// mean inverse shortest travel time. unreachable and zero-time pairs
/// contribute nothing.
fn raw_efficiency(graph: &TransitGraph, denom: usize) -> f64 {
    let dense = DenseGraph::from_graph(graph);
    // per-source sums are collected in source order so the total does not
    // depend on thread scheduling
    let per_source: Vec<f64> = (0..dense.n_stops())
        .into_par_iter()
        .map(|src| {
            dense
                .dijkstra(src)
                .into_iter()
                .enumerate()
                .filter(|(dst, _)| *dst != src)
                .filter_map(|(_, time)| time.filter(|t| *t > 0.0).map(|t| 1.0 / t))
                .sum::<f64>()
        })
        .collect();
    per_source.iter().sum::<f64>() / denom as f64
}

fn compute_ideal_efficiency<D: DistanceLookup + Sync>(
    graph: &TransitGraph,
    distances: &D,
    reference_speed_kmh: f64,
    denom: usize,
) -> Result<f64, NetoptError> {
    if reference_speed_kmh <= 0.0 || !reference_speed_kmh.is_finite() {
        return Err(NetoptError::InvalidInput(format!(
            "reference speed must be a positive number, found {reference_speed_kmh}"
        )));
    }
    let stops = graph.sorted_stops();
    let per_source = stops
        .par_iter()
        .map(|u| -> Result<f64, NetoptError> {
            let mut acc = 0.0;
            for v in stops.iter() {
                if u == v {
                    continue;
                }
                let d = distances.distance_km(u, v)?;
                if d > 0.0 {
                    acc += 1.0 / ((d / reference_speed_kmh) * 3600.0);
                }
            }
            Ok(acc)
        })
        .collect::<Result<Vec<f64>, NetoptError>>()?;
    Ok(per_source.iter().sum::<f64>() / denom as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{DistanceTable, EdgeMode, GeoLookup, StopId, StopLocation};

    fn s(x: &str) -> StopId {
        StopId::from(x)
    }

    #[test]
    fn test_direct_line_at_reference_speed_scores_one() {
        let mut graph = TransitGraph::empty();
        // 10 km at 50 km/h
        graph.add_bidirectional_edge(&s("A - West"), &s("A - East"), EdgeMode::Transit, 720.0);
        let mut distances = DistanceTable::new();
        distances.insert(&s("A - West"), &s("A - East"), 10.0);

        let result = global_efficiency(&graph, &distances, 50.0, None, None).unwrap();
        assert_eq!(result.denom, 2);
        assert!((result.ideal_efficiency - 1.0 / 720.0).abs() < 1e-12);
        assert!((result.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hub_counts_as_one_stop() {
        let mut graph = TransitGraph::empty();
        graph.add_bidirectional_edge(&s("A - Gare"), &s("7 - Gare"), EdgeMode::Walk, 120.0);
        graph.add_bidirectional_edge(&s("A - Gare"), &s("A - Parc"), EdgeMode::Transit, 600.0);
        assert_eq!(graph.n_stops(), 3);
        assert_eq!(hub_collapsed_denominator(&graph), 2);
    }

    #[test]
    fn test_degenerate_networks_score_zero() {
        let distances = DistanceTable::new();
        let mut graph = TransitGraph::empty();
        let empty = global_efficiency(&graph, &distances, 50.0, None, None).unwrap();
        assert_eq!(empty.score, 0.0);
        assert_eq!(empty.denom, 0);

        graph.add_stop(&s("A - Gare"));
        let single = global_efficiency(&graph, &distances, 50.0, None, None).unwrap();
        assert_eq!(single.score, 0.0);

        // two co-located stops: ideal efficiency is 0
        let mut colocated = DistanceTable::new();
        colocated.insert(&s("A - Gare"), &s("B - Gare"), 0.0);
        graph.add_bidirectional_edge(&s("A - Gare"), &s("B - Gare"), EdgeMode::Transit, 60.0);
        let zero_ideal = global_efficiency(&graph, &colocated, 50.0, None, None).unwrap();
        assert_eq!(zero_ideal.ideal_efficiency, 0.0);
        assert_eq!(zero_ideal.score, 0.0);
    }

    #[test]
    fn test_transit_only_network_is_bounded() {
        // a line slower than the reference speed, plus one unreachable stop
        let mut geo = GeoLookup::new();
        geo.insert(s("3 - Nord"), StopLocation::new(48.90, 2.35));
        geo.insert(s("3 - Centre"), StopLocation::new(48.85, 2.35));
        geo.insert(s("3 - Sud"), StopLocation::new(48.80, 2.35));
        geo.insert(s("T1 - Isole"), StopLocation::new(48.85, 2.50));
        let distances = DistanceTable::from_geo_lookup(&geo);

        let mut graph = TransitGraph::empty();
        for (a, b) in [("3 - Nord", "3 - Centre"), ("3 - Centre", "3 - Sud")] {
            let km = geo[&s(a)].haversine_km(&geo[&s(b)]);
            graph.add_bidirectional_edge(&s(a), &s(b), EdgeMode::Transit, km / 30.0 * 3600.0);
        }
        graph.add_stop(&s("T1 - Isole"));

        let result = global_efficiency(&graph, &distances, 50.0, None, None).unwrap();
        assert_eq!(result.denom, 12);
        assert!(result.score > 0.0 && result.score <= 1.0, "score {}", result.score);

        // cached values are reused as given
        let cached = global_efficiency(
            &graph,
            &distances,
            50.0,
            Some(result.ideal_efficiency),
            Some(result.denom),
        )
        .unwrap();
        assert_eq!(cached, result);
    }

    #[test]
    fn test_missing_distance_propagates() {
        let mut graph = TransitGraph::empty();
        graph.add_bidirectional_edge(&s("A - West"), &s("A - East"), EdgeMode::Transit, 720.0);
        let result = global_efficiency(&graph, &DistanceTable::new(), 50.0, None, None);
        assert!(matches!(result, Err(NetoptError::MissingDistance(_, _))));
    }
}
