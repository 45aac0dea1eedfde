mod route_resolver;
mod segment_intersection;

pub use route_resolver::{resolve_route, ResolvedRoute};
pub use segment_intersection::segment_intersection;
