mod line_search;
mod search_control;
mod synthetic_line;
mod top_improvements;

pub use line_search::{
    evaluate_candidate, search_new_lines, SearchParameters, SearchResult, SimulationContext,
};
pub use search_control::SearchControl;
pub use synthetic_line::SyntheticLine;
pub use top_improvements::TopImprovements;
