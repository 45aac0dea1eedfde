mod candidate_pair;
mod improvement;

pub use candidate_pair::{CandidatePair, CandidatesByMode, PricedCandidate, PricedCandidatesByMode};
pub use improvement::{cost_effectiveness, Improvement};
