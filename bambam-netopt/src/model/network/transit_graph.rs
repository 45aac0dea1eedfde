use super::{AdjacencyDirection as Dir, EdgeMode, EdgeRecord, StopId, TransitEdge};
use crate::model::NetoptError;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap, HashSet};

/// directed weighted multigraph of stops.
///
/// every stop always has an edge list and both adjacency entries, even when
/// empty, so that inserting and then removing a stop leaves the graph equal
/// to its prior state.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TransitGraph {
    /// outgoing edges per source stop, in insertion order. parallel edges allowed.
    edges: HashMap<StopId, Vec<TransitEdge>>,
    /// forward and reverse adjacency list
    adj: HashMap<(StopId, Dir), HashSet<StopId>>,
}

impl TransitGraph {
    pub fn empty() -> TransitGraph {
        TransitGraph {
            edges: HashMap::new(),
            adj: HashMap::new(),
        }
    }

    /// builds a graph from a list of edge records. stops are created as they
    /// are first referenced.
    pub fn from_records(records: impl IntoIterator<Item = EdgeRecord>) -> TransitGraph {
        let mut graph = TransitGraph::empty();
        for record in records {
            graph.add_edge(&record.src, &record.dst, record.mode, record.length);
        }
        graph
    }

    pub fn n_stops(&self) -> usize {
        self.edges.len()
    }

    /// number of directed edges, counting parallel edges separately
    pub fn n_edges(&self) -> usize {
        self.edges.values().map(|es| es.len()).sum()
    }

    pub fn contains_stop(&self, stop: &StopId) -> bool {
        self.edges.contains_key(stop)
    }

    /// inserts a stop without edges. returns false if it already existed.
    pub fn add_stop(&mut self, stop: &StopId) -> bool {
        if self.contains_stop(stop) {
            return false;
        }
        self.edges.insert(stop.clone(), vec![]);
        self.adj.insert((stop.clone(), Dir::Forward), HashSet::new());
        self.adj.insert((stop.clone(), Dir::Reverse), HashSet::new());
        true
    }

    /// appends a directed edge, creating either stop if missing.
    pub fn add_edge(&mut self, src: &StopId, dst: &StopId, mode: EdgeMode, length: f64) {
        self.add_stop(src);
        self.add_stop(dst);
        if let Some(out) = self.edges.get_mut(src) {
            out.push(TransitEdge::new(dst.clone(), mode, length));
        }
        if let Some(fwd) = self.adj.get_mut(&(src.clone(), Dir::Forward)) {
            fwd.insert(dst.clone());
        }
        if let Some(rev) = self.adj.get_mut(&(dst.clone(), Dir::Reverse)) {
            rev.insert(src.clone());
        }
    }

    /// adds an edge in each direction with the same mode and length.
    pub fn add_bidirectional_edge(&mut self, a: &StopId, b: &StopId, mode: EdgeMode, length: f64) {
        self.add_edge(a, b, mode, length);
        self.add_edge(b, a, mode, length);
    }

    /// removes a stop along with every edge entering or leaving it.
    pub fn remove_stop(&mut self, stop: &StopId) -> Result<(), NetoptError> {
        let out_edges = self
            .edges
            .remove(stop)
            .ok_or_else(|| NetoptError::MissingStop(stop.clone()))?;
        let successors = self
            .adj
            .remove(&(stop.clone(), Dir::Forward))
            .unwrap_or_default();
        let predecessors = self
            .adj
            .remove(&(stop.clone(), Dir::Reverse))
            .unwrap_or_default();

        for dst in successors.iter() {
            if let Some(rev) = self.adj.get_mut(&(dst.clone(), Dir::Reverse)) {
                rev.remove(stop);
            }
        }
        for src in predecessors.iter() {
            if let Some(out) = self.edges.get_mut(src) {
                out.retain(|e| &e.dst != stop);
            }
            if let Some(fwd) = self.adj.get_mut(&(src.clone(), Dir::Forward)) {
                fwd.remove(stop);
            }
        }
        log::trace!(
            "removed stop '{}' with {} out-edges and {} predecessors",
            stop,
            out_edges.len(),
            predecessors.len()
        );
        Ok(())
    }

    pub fn stops(&self) -> impl Iterator<Item = &StopId> {
        self.edges.keys()
    }

    /// stops in lexicographic order, used wherever iteration order must be
    /// reproducible across runs.
    pub fn sorted_stops(&self) -> Vec<&StopId> {
        self.edges.keys().sorted().collect_vec()
    }

    pub fn out_edges(&self, stop: &StopId) -> &[TransitEdge] {
        self.edges.get(stop).map(|es| es.as_slice()).unwrap_or(&[])
    }

    /// every directed edge as a (source, edge) pair, in no particular order.
    pub fn edge_iter(&self) -> impl Iterator<Item = (&StopId, &TransitEdge)> {
        self.edges
            .iter()
            .flat_map(|(src, es)| es.iter().map(move |e| (src, e)))
    }

    /// every non-walking edge, sorted by (source, destination). parallel edges
    /// keep their insertion order.
    pub fn sorted_transit_edges(&self) -> Vec<(&StopId, &TransitEdge)> {
        self.edge_iter()
            .filter(|(_, e)| !e.mode.is_walk())
            .sorted_by(|(a_src, a), (b_src, b)| (*a_src, &a.dst).cmp(&(*b_src, &b.dst)))
            .collect_vec()
    }

    pub fn neighbors(&self, stop: &StopId, direction: Dir) -> Option<&HashSet<StopId>> {
        self.adj.get(&(stop.clone(), direction))
    }

    pub fn out_neighbors(&self, stop: &StopId) -> Option<&HashSet<StopId>> {
        self.neighbors(stop, Dir::Forward)
    }

    pub fn in_neighbors(&self, stop: &StopId) -> Option<&HashSet<StopId>> {
        self.neighbors(stop, Dir::Reverse)
    }

    /// true if any edge joins the two stops, in either direction.
    pub fn has_edge_between(&self, a: &StopId, b: &StopId) -> bool {
        let forward = self.out_neighbors(a).is_some_and(|n| n.contains(b));
        let reverse = self.out_neighbors(b).is_some_and(|n| n.contains(a));
        forward || reverse
    }

    /// the stops reachable from this stop through a single outgoing walking
    /// edge, i.e. its hub-mates.
    pub fn walk_neighbors(&self, stop: &StopId) -> BTreeSet<StopId> {
        self.out_edges(stop)
            .iter()
            .filter(|e| e.mode.is_walk())
            .map(|e| e.dst.clone())
            .collect()
    }

    /// flattens the graph into edge records sorted by (source, destination).
    pub fn to_records(&self) -> Vec<EdgeRecord> {
        self.edge_iter()
            .sorted_by(|(a_src, a), (b_src, b)| (*a_src, &a.dst).cmp(&(*b_src, &b.dst)))
            .map(|(src, e)| EdgeRecord {
                src: src.clone(),
                dst: e.dst.clone(),
                mode: e.mode,
                length: e.length,
            })
            .collect_vec()
    }
}
