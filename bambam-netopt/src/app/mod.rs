pub mod network_reader;
pub mod result_writer;
mod search_app;

pub use search_app::{run_search, run_summary};
