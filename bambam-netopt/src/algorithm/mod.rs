pub mod diagnostics;
pub mod efficiency;
pub mod filter;
pub mod generation;
pub mod routing;
mod search;
pub mod shortest_path;
pub mod simulation;

pub use search::{bfs_walk_hub, walk_hubs};
