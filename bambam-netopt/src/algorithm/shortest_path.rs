use crate::model::network::{StopId, TransitGraph};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

/// index-based copy of a [`TransitGraph`] for repeated shortest path
/// searches. stops are indexed in lexicographic order. parallel edges are
/// kept; the search simply relaxes each of them.
#[derive(Debug, Clone)]
pub struct DenseGraph {
    stops: Vec<StopId>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

/// result of a single-source search. `None` marks an unreachable stop.
pub struct ShortestPathTree {
    pub times: Vec<Option<f64>>,
    pub predecessors: Vec<Option<usize>>,
}

impl DenseGraph {
    pub fn from_graph(graph: &TransitGraph) -> DenseGraph {
        let stops = graph.sorted_stops().into_iter().cloned().collect_vec();
        let index: HashMap<&StopId, usize> =
            stops.iter().enumerate().map(|(i, s)| (s, i)).collect();
        let adjacency = stops
            .iter()
            .map(|src| {
                graph
                    .out_edges(src)
                    .iter()
                    .filter_map(|e| index.get(&e.dst).map(|dst| (*dst, e.length)))
                    .collect_vec()
            })
            .collect_vec();
        DenseGraph { stops, adjacency }
    }

    pub fn n_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn stop(&self, index: usize) -> &StopId {
        &self.stops[index]
    }

    pub fn out_adjacency(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }

    /// minimum travel time from `src` to every stop, in seconds.
    pub fn dijkstra(&self, src: usize) -> Vec<Option<f64>> {
        self.shortest_path_tree(src).times
    }

    /// Dijkstra's algorithm over edge lengths, also recording the predecessor
    /// of each stop on its shortest path.
    pub fn shortest_path_tree(&self, src: usize) -> ShortestPathTree {
        let n = self.stops.len();
        let mut times: Vec<Option<f64>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
        if src >= n {
            return ShortestPathTree {
                times,
                predecessors,
            };
        }
        times[src] = Some(0.0);
        frontier.push(Reverse((OrderedFloat(0.0), src)));

        while let Some(Reverse((OrderedFloat(time), current))) = frontier.pop() {
            if settled[current] {
                continue;
            }
            settled[current] = true;
            for (dst, length) in self.adjacency[current].iter() {
                let candidate = time + length;
                let improves = match times[*dst] {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves && !settled[*dst] {
                    times[*dst] = Some(candidate);
                    predecessors[*dst] = Some(current);
                    frontier.push(Reverse((OrderedFloat(candidate), *dst)));
                }
            }
        }
        ShortestPathTree {
            times,
            predecessors,
        }
    }
}

impl ShortestPathTree {
    /// stop indices along the shortest path from the search origin to `dst`,
    /// or None if `dst` was not reached.
    pub fn path_to(&self, dst: usize) -> Option<Vec<usize>> {
        self.times.get(dst).copied().flatten()?;
        let mut path = vec![dst];
        let mut current = dst;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}
