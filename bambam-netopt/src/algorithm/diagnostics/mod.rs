mod network_summary;
mod strongly_connected;

pub use network_summary::NetworkSummary;
pub use strongly_connected::strongly_connected_components;
