use crate::model::network::{LineMode, StopId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// a proposed new line between two existing stops, for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidatePair {
    pub stops: (StopId, StopId),
    pub mode: LineMode,
}

impl CandidatePair {
    pub fn new(a: StopId, b: StopId, mode: LineMode) -> CandidatePair {
        CandidatePair {
            stops: (a, b),
            mode,
        }
    }
}

/// a candidate that passed the length filter, with its construction cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedCandidate {
    pub stops: (StopId, StopId),
    pub mode: LineMode,
    /// endpoint distance from the distance table
    pub distance_km: f64,
    pub cost: f64,
}

pub type CandidatesByMode = BTreeMap<LineMode, Vec<CandidatePair>>;
pub type PricedCandidatesByMode = BTreeMap<LineMode, Vec<PricedCandidate>>;
