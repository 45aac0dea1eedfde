use super::strongly_connected_components;
use crate::algorithm::shortest_path::DenseGraph;
use crate::model::network::TransitGraph;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

/// structural and travel-time metrics describing a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub n_stops: usize,
    pub n_edges: usize,
    pub n_strongly_connected_components: usize,
    pub is_strongly_connected: bool,
    /// edges - stops + components. a measure of route redundancy
    pub cyclomatic_number: i64,
    /// average number of stops adjacent to a stop, counting each direction once
    pub mean_degree: f64,
    /// average over stops of the mean shortest travel time to every other
    /// reachable stop, in minutes
    pub avg_travel_time_minutes: f64,
    /// average over stops of the mean number of line changes on the shortest
    /// path to every other reachable stop
    pub avg_line_changes: f64,
}

struct SourceMetrics {
    mean_time_seconds: Option<f64>,
    mean_line_changes: Option<f64>,
}

impl NetworkSummary {
    pub fn from_graph(graph: &TransitGraph) -> NetworkSummary {
        let dense = DenseGraph::from_graph(graph);
        let n_stops = graph.n_stops();
        let n_edges = graph.n_edges();
        let (n_components, _) = strongly_connected_components(&dense);

        let per_source: Vec<SourceMetrics> = (0..dense.n_stops())
            .into_par_iter()
            .map(|src| source_metrics(&dense, src))
            .collect();
        let avg_travel_time_minutes =
            mean(per_source.iter().filter_map(|m| m.mean_time_seconds)).unwrap_or(0.0) / 60.0;
        let avg_line_changes =
            mean(per_source.iter().filter_map(|m| m.mean_line_changes)).unwrap_or(0.0);
        // in + out degree halved, averaged over stops
        let mean_degree = if n_stops == 0 {
            0.0
        } else {
            n_edges as f64 / n_stops as f64
        };

        NetworkSummary {
            n_stops,
            n_edges,
            n_strongly_connected_components: n_components,
            is_strongly_connected: n_components == 1,
            cyclomatic_number: n_edges as i64 - n_stops as i64 + n_components as i64,
            mean_degree,
            avg_travel_time_minutes,
            avg_line_changes,
        }
    }

    pub fn log(&self, title: &str) {
        log::info!("{title}: {} stops, {} edges", self.n_stops, self.n_edges);
        if self.is_strongly_connected {
            log::info!("{title}: the directed graph is strongly connected");
        } else {
            log::info!(
                "{title}: the directed graph is not strongly connected ({} components)",
                self.n_strongly_connected_components
            );
        }
        log::info!("{title}: cyclomatic number {}", self.cyclomatic_number);
        log::info!("{title}: mean degree {:.2}", self.mean_degree);
        log::info!(
            "{title}: average time to reach other stops {:.1} minutes",
            self.avg_travel_time_minutes
        );
        log::info!(
            "{title}: average number of line changes {:.2}",
            self.avg_line_changes
        );
    }
}

fn source_metrics(dense: &DenseGraph, src: usize) -> SourceMetrics {
    let tree = dense.shortest_path_tree(src);
    let reachable = (0..dense.n_stops())
        .filter(|dst| *dst != src && tree.times[*dst].is_some())
        .collect_vec();
    let mean_time_seconds = mean(reachable.iter().filter_map(|dst| tree.times[*dst]));
    let mean_line_changes = mean(reachable.iter().filter_map(|dst| {
        let path = tree.path_to(*dst)?;
        let lines: HashSet<&str> = path.iter().map(|i| dense.stop(*i).line_tag()).collect();
        Some(lines.len().saturating_sub(1) as f64)
    }));
    SourceMetrics {
        mean_time_seconds,
        mean_line_changes,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
