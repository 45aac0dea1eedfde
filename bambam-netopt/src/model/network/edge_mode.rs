use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// travel mode of a graph edge. walking edges join stops of a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    Transit,
    Walk,
}

impl EdgeMode {
    pub fn is_walk(&self) -> bool {
        matches!(self, EdgeMode::Walk)
    }
}

impl Display for EdgeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeMode::Transit => write!(f, "transit"),
            EdgeMode::Walk => write!(f, "walk"),
        }
    }
}
