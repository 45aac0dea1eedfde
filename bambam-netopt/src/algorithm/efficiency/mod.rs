mod efficiency_baseline;
mod global_efficiency;

pub use efficiency_baseline::EfficiencyBaseline;
pub use global_efficiency::{global_efficiency, hub_collapsed_denominator, GlobalEfficiency};
