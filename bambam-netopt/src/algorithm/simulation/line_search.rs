use super::{SearchControl, SyntheticLine, TopImprovements};
use crate::algorithm::{
    efficiency::EfficiencyBaseline,
    filter::{cheapest_candidates, DEFAULT_MIN_LENGTH_KM},
    generation::{generate_candidates, HubCoverage},
    routing::resolve_route,
};
use crate::model::candidate::{cost_effectiveness, Improvement, PricedCandidate};
use crate::model::network::{
    geo_distance_km, LineMode, ModeCosts, ModeSpeeds, TransitGraph, TransitNetwork,
};
use crate::model::NetoptError;
use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// how often, in candidates, the sequential search logs its current best.
const REPORT_INTERVAL: usize = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    /// cheapest candidates evaluated per mode
    pub k: usize,
    /// best improvements retained per mode
    pub n: usize,
    pub min_length_km: f64,
    pub modes: Vec<LineMode>,
    pub parallelize: bool,
}

impl Default for SearchParameters {
    fn default() -> Self {
        SearchParameters {
            k: 100,
            n: 5,
            min_length_km: DEFAULT_MIN_LENGTH_KM,
            modes: LineMode::ALL.to_vec(),
            parallelize: true,
        }
    }
}

/// read-only inputs shared by every candidate evaluation.
pub struct SimulationContext<'a> {
    pub network: &'a TransitNetwork,
    pub speeds: &'a ModeSpeeds,
    pub costs: &'a ModeCosts,
    pub baseline: &'a EfficiencyBaseline,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub baseline: EfficiencyBaseline,
    pub speeds: ModeSpeeds,
    /// best improvements per mode, best first
    pub improvements: BTreeMap<LineMode, Vec<Improvement>>,
    /// true if the search was cancelled or timed out before finishing
    pub interrupted: bool,
}

/// simulates one candidate line on a working copy of the base graph.
///
/// the line is built, the modified network scored against the baseline, and
/// the line rolled back, leaving `working` as it was. the rollback happens
/// whether or not scoring succeeded.
///
/// # Returns
///
/// The improvement with its own snapshot of the modified graph if the line
/// raises efficiency, otherwise None.
pub fn evaluate_candidate(
    ctx: &SimulationContext,
    candidate: &PricedCandidate,
    working: &mut TransitGraph,
) -> Result<Option<Improvement>, NetoptError> {
    let network = ctx.network;
    let (stop_a, stop_b) = &candidate.stops;
    let route = resolve_route(stop_a, stop_b, working, &network.distances, &network.geo)?;
    let line = SyntheticLine::build(
        working,
        &route,
        candidate.mode,
        ctx.speeds,
        &network.distances,
    )?;

    let outcome = {
        let overlay = line.distance_overlay(&network.distances);
        ctx.baseline
            .score(working, &overlay)
            .and_then(|new_efficiency| {
                if new_efficiency <= ctx.baseline.efficiency {
                    return Ok(None);
                }
                let dist_km = geo_distance_km(&network.geo, stop_a, stop_b)?;
                let cost = dist_km * ctx.costs.cost_per_km(candidate.mode);
                let increase_eff = new_efficiency - ctx.baseline.efficiency;
                Ok(Some(Improvement {
                    stops: candidate.stops.clone(),
                    mode: candidate.mode,
                    score: cost_effectiveness(increase_eff, cost),
                    increase_eff,
                    cost,
                    route: route.stops.clone(),
                    graph: working.clone(),
                }))
            })
    };
    line.rollback(working)?;
    outcome
}

/// searches for the most cost-effective new lines of each configured mode.
///
/// candidates are enumerated over the base graph, the `k` cheapest per mode
/// are simulated, and the `n` best are retained. a failing candidate is
/// logged and skipped. the parallel path gives each rayon worker its own copy
/// of the base graph and returns the same result as the sequential path.
pub fn search_new_lines(
    network: &TransitNetwork,
    speeds: &ModeSpeeds,
    costs: &ModeCosts,
    params: &SearchParameters,
    control: &SearchControl,
) -> Result<SearchResult, NetoptError> {
    let baseline = EfficiencyBaseline::new(
        &network.graph,
        &network.distances,
        speeds.reference_speed_kmh(),
    )?;
    let modes = params.modes.iter().copied().unique().sorted().collect_vec();
    let candidates = generate_candidates(&network.graph, &modes, &mut HubCoverage::new());
    let priced = cheapest_candidates(
        &candidates,
        params.k,
        &network.distances,
        costs,
        params.min_length_km,
    );
    let ctx = SimulationContext {
        network,
        speeds,
        costs,
        baseline: &baseline,
    };

    let mut improvements = BTreeMap::new();
    for (mode, mode_candidates) in priced.iter() {
        if mode_candidates.is_empty() {
            log::info!("no {mode} candidates to evaluate");
            improvements.insert(*mode, vec![]);
            continue;
        }
        if control.is_stopped() {
            log::warn!("search stopped before evaluating {mode} candidates");
            improvements.insert(*mode, vec![]);
            continue;
        }
        log::info!("checking {} potential new {mode} connections", mode_candidates.len());
        let top = if params.parallelize {
            evaluate_parallel(&ctx, mode_candidates, params.n, control)
        } else {
            evaluate_sequential(&ctx, mode_candidates, params.n, control)
        };
        let best = top.into_sorted();
        for imp in best.iter() {
            log::info!(
                "{mode} {} <-> {}: score {:.6}, efficiency +{:.6}, cost {:.0}, route [{}]",
                imp.stops.0,
                imp.stops.1,
                imp.score,
                imp.increase_eff,
                imp.cost,
                imp.route.iter().join(", ")
            );
        }
        improvements.insert(*mode, best);
    }

    let interrupted = control.is_stopped();
    if interrupted {
        log::warn!("line search was interrupted, results are partial");
    }
    Ok(SearchResult {
        baseline,
        speeds: *speeds,
        improvements,
        interrupted,
    })
}

fn evaluate_sequential(
    ctx: &SimulationContext,
    candidates: &[PricedCandidate],
    n: usize,
    control: &SearchControl,
) -> TopImprovements {
    let mut top = TopImprovements::new(n);
    let mut working = ctx.network.graph.clone();
    let candidate_iter = tqdm!(
        candidates.iter().enumerate(),
        total = candidates.len(),
        desc = "evaluate candidates"
    );
    for (seq, candidate) in candidate_iter {
        if control.is_stopped() {
            break;
        }
        if let Some(improvement) = evaluate_or_warn(ctx, candidate, &mut working) {
            top.offer(seq, improvement);
        }
        if seq > 0 && seq % REPORT_INTERVAL == 0 {
            log::debug!(
                "after {seq} candidates, {} retained with minimum score {:?}",
                top.len(),
                top.min_score()
            );
        }
    }
    eprintln!();
    top
}

fn evaluate_parallel(
    ctx: &SimulationContext,
    candidates: &[PricedCandidate],
    n: usize,
    control: &SearchControl,
) -> TopImprovements {
    candidates
        .par_iter()
        .enumerate()
        .map_init(
            || ctx.network.graph.clone(),
            |working, (seq, candidate)| {
                if control.is_stopped() {
                    return None;
                }
                evaluate_or_warn(ctx, candidate, working).map(|imp| (seq, imp))
            },
        )
        .fold(
            || TopImprovements::new(n),
            |mut top, entry| {
                if let Some((seq, imp)) = entry {
                    top.offer(seq, imp);
                }
                top
            },
        )
        .reduce(|| TopImprovements::new(n), TopImprovements::merge)
}

fn evaluate_or_warn(
    ctx: &SimulationContext,
    candidate: &PricedCandidate,
    working: &mut TransitGraph,
) -> Option<Improvement> {
    match evaluate_candidate(ctx, candidate, working) {
        Ok(result) => result,
        Err(e) => {
            log::warn!(
                "skipping {} candidate {} <-> {}: {e}",
                candidate.mode,
                candidate.stops.0,
                candidate.stops.1
            );
            None
        }
    }
}
