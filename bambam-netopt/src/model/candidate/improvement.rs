use crate::model::network::{LineMode, StopId, TransitGraph};
use serde::Serialize;

/// a simulated candidate line that raised the network efficiency.
#[derive(Debug, Clone, Serialize)]
pub struct Improvement {
    pub stops: (StopId, StopId),
    pub mode: LineMode,
    /// efficiency gain in percent per million of currency invested
    pub score: f64,
    pub increase_eff: f64,
    pub cost: f64,
    /// existing stops served by the new line, from the first endpoint
    pub route: Vec<StopId>,
    /// the network with the new line built in
    #[serde(skip)]
    pub graph: TransitGraph,
}

/// efficiency gain in percent per million invested.
pub fn cost_effectiveness(increase_eff: f64, cost: f64) -> f64 {
    (increase_eff * 100.0) / (cost / 1_000_000.0)
}
