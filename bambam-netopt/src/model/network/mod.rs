mod adjacency_direction;
mod distance_overlay;
mod distance_table;
mod edge_mode;
mod line_classifier;
mod line_mode;
mod mode_speeds;
mod stop_id;
mod stop_location;
mod transit_edge;
mod transit_graph;
mod transit_network;

pub use adjacency_direction::AdjacencyDirection;
pub use distance_overlay::DistanceOverlay;
pub use distance_table::{DistanceLookup, DistanceTable};
pub use edge_mode::EdgeMode;
pub use line_classifier::LineClassifier;
pub use line_mode::{LineMode, ModeCosts};
pub use mode_speeds::{ModeSpeedOverrides, ModeSpeeds};
pub use stop_id::{StopId, STOP_NAME_SEPARATOR};
pub use stop_location::{geo_distance_km, stop_location, GeoLookup, StopLocation};
pub use transit_edge::{EdgeRecord, TransitEdge};
pub use transit_graph::TransitGraph;
pub use transit_network::TransitNetwork;
