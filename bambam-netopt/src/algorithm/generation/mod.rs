mod candidate_generation;
mod hub_coverage;

pub use candidate_generation::generate_candidates;
pub use hub_coverage::HubCoverage;
