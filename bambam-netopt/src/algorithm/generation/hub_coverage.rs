use crate::model::network::{StopId, TransitGraph};
use std::collections::HashSet;

/// stops whose hub has already been paired with another stop. once a pair
/// is accepted, pairs touching a walk-neighbor of either endpoint are
/// considered redundant with it.
#[derive(Debug, Default, Clone)]
pub struct HubCoverage {
    covered: HashSet<StopId>,
}

impl HubCoverage {
    pub fn new() -> HubCoverage {
        HubCoverage::default()
    }

    pub fn is_covered(&self, stop: &StopId) -> bool {
        self.covered.contains(stop)
    }

    /// marks every walk-neighbor of `stop` as covered. `stop` itself is not.
    pub fn cover_walk_neighbors(&mut self, stop: &StopId, graph: &TransitGraph) {
        self.covered.extend(graph.walk_neighbors(stop));
    }

    pub fn len(&self) -> usize {
        self.covered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }
}
