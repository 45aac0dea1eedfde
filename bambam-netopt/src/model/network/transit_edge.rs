use super::{EdgeMode, StopId};
use serde::{Deserialize, Serialize};

/// a directed leg leaving some source stop. the source is implied by the
/// adjacency list the edge is stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEdge {
    pub dst: StopId,
    pub mode: EdgeMode,
    /// traversal time in seconds
    pub length: f64,
}

impl TransitEdge {
    pub fn new(dst: StopId, mode: EdgeMode, length: f64) -> TransitEdge {
        TransitEdge { dst, mode, length }
    }
}

/// flat edge record used for reading and writing edge lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: StopId,
    pub dst: StopId,
    pub mode: EdgeMode,
    pub length: f64,
}
