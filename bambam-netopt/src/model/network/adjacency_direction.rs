use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// direction of an adjacency list entry relative to the stop that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyDirection {
    /// successors (out-edges)
    Forward,
    /// predecessors (in-edges)
    Reverse,
}

impl Display for AdjacencyDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjacencyDirection::Forward => write!(f, "forward"),
            AdjacencyDirection::Reverse => write!(f, "reverse"),
        }
    }
}
