use crate::model::network::{StopId, TransitGraph};
use itertools::Itertools;
use std::collections::{HashSet, LinkedList};

/// finds the hub containing a stop: the set of stops connected to it through
/// walking edges, followed in either direction, using a breadth-first search.
///
/// # Arguments
///
/// * `src` - origin of the search
/// * `graph` - graph to search
///
/// # Returns
///
/// The set of stops sharing a hub with `src`, including `src`.
pub fn bfs_walk_hub(src: &StopId, graph: &TransitGraph) -> HashSet<StopId> {
    // breadth-first search is modeled here with a linked list FIFO queue.
    let mut visited: HashSet<StopId> = HashSet::new();
    let mut frontier: LinkedList<StopId> = LinkedList::new();
    frontier.push_back(src.clone());

    while let Some(next_id) = frontier.pop_front() {
        if !visited.insert(next_id.clone()) {
            continue;
        }
        // neighbors are sorted for algorithmic determinism (frontier insertion order).
        let walk_neighbors = walk_adjacent(&next_id, graph).into_iter().sorted();
        for neighbor in walk_neighbors {
            if !visited.contains(&neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    visited
}

/// every stop linked to `stop` by a walking edge in either direction.
fn walk_adjacent(stop: &StopId, graph: &TransitGraph) -> HashSet<StopId> {
    let mut adjacent: HashSet<StopId> = graph.walk_neighbors(stop).into_iter().collect();
    if let Some(predecessors) = graph.in_neighbors(stop) {
        for pred in predecessors.iter() {
            let walks_in = graph
                .out_edges(pred)
                .iter()
                .any(|e| e.mode.is_walk() && &e.dst == stop);
            if walks_in {
                adjacent.insert(pred.clone());
            }
        }
    }
    adjacent
}

/// partitions the stops of the graph into hubs. a stop without walking
/// edges is a hub of its own. hubs are returned in the order of their
/// lexicographically smallest stop.
pub fn walk_hubs(graph: &TransitGraph) -> Vec<HashSet<StopId>> {
    let mut assigned: HashSet<StopId> = HashSet::new();
    let mut hubs = vec![];
    for stop in graph.sorted_stops() {
        if assigned.contains(stop) {
            continue;
        }
        let hub = bfs_walk_hub(stop, graph);
        assigned.extend(hub.iter().cloned());
        hubs.push(hub);
    }
    hubs
}
