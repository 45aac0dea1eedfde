use super::{global_efficiency, GlobalEfficiency};
use crate::model::network::{DistanceLookup, TransitGraph};
use crate::model::NetoptError;
use serde::Serialize;

/// efficiency of the base network along with the normalization terms every
/// modified copy of it is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyBaseline {
    pub efficiency: f64,
    pub ideal_efficiency: f64,
    pub denom: usize,
    pub reference_speed_kmh: f64,
}

impl EfficiencyBaseline {
    pub fn new<D: DistanceLookup + Sync>(
        graph: &TransitGraph,
        distances: &D,
        reference_speed_kmh: f64,
    ) -> Result<EfficiencyBaseline, NetoptError> {
        let GlobalEfficiency {
            score,
            ideal_efficiency,
            denom,
        } = global_efficiency(graph, distances, reference_speed_kmh, None, None)?;
        log::info!("efficiency of the base network: {score}");
        Ok(EfficiencyBaseline {
            efficiency: score,
            ideal_efficiency,
            denom,
            reference_speed_kmh,
        })
    }

    /// efficiency of a variant of the base network, normalized with the base
    /// network's ideal efficiency and pair count.
    pub fn score<D: DistanceLookup + Sync>(
        &self,
        graph: &TransitGraph,
        distances: &D,
    ) -> Result<f64, NetoptError> {
        let result = global_efficiency(
            graph,
            distances,
            self.reference_speed_kmh,
            Some(self.ideal_efficiency),
            Some(self.denom),
        )?;
        Ok(result.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{DistanceTable, EdgeMode, StopId};

    #[test]
    fn test_faster_variant_scores_higher() {
        let (a, b, c) = (StopId::from("3 - A"), StopId::from("3 - B"), StopId::from("3 - C"));
        let mut distances = DistanceTable::new();
        distances.insert(&a, &b, 5.0);
        distances.insert(&b, &c, 5.0);
        distances.insert(&a, &c, 10.0);
        let mut graph = TransitGraph::empty();
        graph.add_bidirectional_edge(&a, &b, EdgeMode::Transit, 600.0);
        graph.add_bidirectional_edge(&b, &c, EdgeMode::Transit, 600.0);

        let baseline = EfficiencyBaseline::new(&graph, &distances, 50.0).unwrap();
        assert_eq!(baseline.denom, 6);
        let same = baseline.score(&graph, &distances).unwrap();
        assert!((same - baseline.efficiency).abs() < 1e-12);

        graph.add_bidirectional_edge(&a, &c, EdgeMode::Transit, 720.0);
        let improved = baseline.score(&graph, &distances).unwrap();
        assert!(improved > baseline.efficiency);
    }
}
