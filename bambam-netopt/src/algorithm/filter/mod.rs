mod cost_filter;

pub use cost_filter::{cheapest_candidates, DEFAULT_MIN_LENGTH_KM};
