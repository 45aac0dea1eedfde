use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// transportation mode of a proposed new line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LineMode {
    #[serde(rename = "RER")]
    Rer,
    #[serde(rename = "metro")]
    Metro,
    #[serde(rename = "tram")]
    Tram,
}

impl LineMode {
    /// every mode, in evaluation order
    pub const ALL: [LineMode; 3] = [LineMode::Rer, LineMode::Metro, LineMode::Tram];

    pub fn as_str(&self) -> &'static str {
        match self {
            LineMode::Rer => "RER",
            LineMode::Metro => "metro",
            LineMode::Tram => "tram",
        }
    }
}

impl Display for LineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// construction and operation cost of one kilometer of new line, per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeCosts {
    #[serde(rename = "RER")]
    pub rer: f64,
    pub metro: f64,
    pub tram: f64,
}

impl Default for ModeCosts {
    fn default() -> Self {
        Self {
            rer: 120_000_000.0,
            metro: 80_000_000.0,
            tram: 22_000_000.0,
        }
    }
}

impl ModeCosts {
    pub fn cost_per_km(&self, mode: LineMode) -> f64 {
        match mode {
            LineMode::Rer => self.rer,
            LineMode::Metro => self.metro,
            LineMode::Tram => self.tram,
        }
    }
}
