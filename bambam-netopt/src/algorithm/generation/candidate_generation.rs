use super::HubCoverage;
use crate::model::candidate::{CandidatePair, CandidatesByMode};
use crate::model::network::{LineMode, TransitGraph};
use itertools::Itertools;
use kdam::tqdm;

/// enumerates the stop pairs a new line could connect.
///
/// pairs are visited in lexicographic order of stop identifiers. a pair is
/// skipped when an edge already joins its stops in either direction, or when
/// either stop is covered. accepting a pair covers the walk-neighbors of both
/// of its stops, so each hub is paired greedily at most once per partner hub.
///
/// # Arguments
///
/// * `graph` - network to extend
/// * `modes` - line modes to propose; each accepted pair appears once per mode
/// * `coverage` - coverage state, updated in place
///
/// # Returns
///
/// The accepted pairs per mode, in acceptance order. Every requested mode has
/// an entry, possibly empty.
pub fn generate_candidates(
    graph: &TransitGraph,
    modes: &[LineMode],
    coverage: &mut HubCoverage,
) -> CandidatesByMode {
    let mut result: CandidatesByMode = modes.iter().map(|m| (*m, vec![])).collect();
    let stops = graph.sorted_stops();
    let n_pairs = stops.len() * stops.len().saturating_sub(1) / 2;
    let pairs_iter = tqdm!(
        stops.iter().tuple_combinations::<(_, _)>(),
        desc = "enumerate candidate pairs",
        total = n_pairs
    );

    let mut n_accepted = 0;
    for (a, b) in pairs_iter {
        if graph.has_edge_between(a, b) {
            continue;
        }
        if coverage.is_covered(a) || coverage.is_covered(b) {
            continue;
        }
        for (mode, candidates) in result.iter_mut() {
            candidates.push(CandidatePair::new((*a).clone(), (*b).clone(), *mode));
        }
        coverage.cover_walk_neighbors(a, graph);
        coverage.cover_walk_neighbors(b, graph);
        n_accepted += 1;
    }
    eprintln!();

    log::info!(
        "accepted {} of {} stop pairs as candidates for {} mode(s)",
        n_accepted,
        n_pairs,
        result.len()
    );
    result
}
