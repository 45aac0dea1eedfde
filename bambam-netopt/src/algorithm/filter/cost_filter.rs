use crate::model::candidate::{CandidatesByMode, PricedCandidate, PricedCandidatesByMode};
use crate::model::network::{DistanceLookup, ModeCosts};
use itertools::Itertools;

/// lines this short or shorter are not worth building.
pub const DEFAULT_MIN_LENGTH_KM: f64 = 5.0;

/// prices every candidate longer than `min_length_km` and keeps the `k`
/// cheapest per mode. the sort is stable, so candidates of equal cost keep
/// their generation order. a candidate whose distance is unknown is logged
/// and dropped.
pub fn cheapest_candidates<D: DistanceLookup>(
    candidates: &CandidatesByMode,
    k: usize,
    distances: &D,
    costs: &ModeCosts,
    min_length_km: f64,
) -> PricedCandidatesByMode {
    let mut result = PricedCandidatesByMode::new();
    for (mode, mode_candidates) in candidates.iter() {
        let cost_per_km = costs.cost_per_km(*mode);
        let mut n_short = 0;
        let priced = mode_candidates
            .iter()
            .filter_map(|candidate| {
                let (a, b) = &candidate.stops;
                let distance_km = match distances.distance_km(a, b) {
                    Ok(d) => d,
                    Err(e) => {
                        log::warn!("skipping candidate {a} <-> {b}: {e}");
                        return None;
                    }
                };
                if distance_km <= min_length_km {
                    n_short += 1;
                    return None;
                }
                Some(PricedCandidate {
                    stops: candidate.stops.clone(),
                    mode: *mode,
                    distance_km,
                    cost: distance_km * cost_per_km,
                })
            })
            .collect_vec();

        let cheapest = priced
            .into_iter()
            .sorted_by(|a, b| a.cost.total_cmp(&b.cost))
            .take(k)
            .collect_vec();
        log::info!(
            "{mode}: kept {} of {} candidates ({} at or under {min_length_km} km)",
            cheapest.len(),
            mode_candidates.len(),
            n_short
        );
        result.insert(*mode, cheapest);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::candidate::CandidatePair;
    use crate::model::network::{DistanceTable, LineMode, StopId};

    fn s(x: &str) -> StopId {
        StopId::from(x)
    }

    fn fixture() -> (CandidatesByMode, DistanceTable) {
        let mut distances = DistanceTable::new();
        distances.insert(&s("1 - A"), &s("1 - B"), 12.0);
        distances.insert(&s("1 - A"), &s("1 - C"), 5.0);
        distances.insert(&s("1 - A"), &s("1 - D"), 7.5);
        distances.insert(&s("1 - B"), &s("1 - C"), 7.5);
        distances.insert(&s("1 - B"), &s("1 - D"), 5.01);
        let pairs = [
            ("1 - A", "1 - B"),
            ("1 - A", "1 - C"),
            ("1 - A", "1 - D"),
            ("1 - B", "1 - C"),
            ("1 - B", "1 - D"),
            // no distance entry
            ("1 - C", "1 - D"),
        ];
        let mut candidates = CandidatesByMode::new();
        for mode in [LineMode::Metro, LineMode::Tram] {
            let list = pairs
                .iter()
                .map(|(a, b)| CandidatePair::new(s(a), s(b), mode))
                .collect_vec();
            candidates.insert(mode, list);
        }
        (candidates, distances)
    }

    #[test]
    fn test_filter_excludes_short_and_orders_by_cost() {
        let (candidates, distances) = fixture();
        let costs = ModeCosts::default();
        let result = cheapest_candidates(&candidates, 10, &distances, &costs, DEFAULT_MIN_LENGTH_KM);

        let tram = &result[&LineMode::Tram];
        // exactly 5 km is excluded, 5.01 km is kept
        assert_eq!(tram.len(), 4);
        assert!(tram.iter().all(|c| c.distance_km > 5.0));
        assert!(tram.windows(2).all(|w| w[0].cost <= w[1].cost));
        assert_eq!(tram[0].stops, (s("1 - B"), s("1 - D")));
        // equal costs keep generation order
        assert_eq!(tram[1].stops, (s("1 - A"), s("1 - D")));
        assert_eq!(tram[2].stops, (s("1 - B"), s("1 - C")));
        assert_eq!(tram[3].cost, 12.0 * costs.tram);
        assert_eq!(result[&LineMode::Metro][3].cost, 12.0 * costs.metro);
    }

    #[test]
    fn test_filter_truncates_to_k() {
        let (candidates, distances) = fixture();
        let costs = ModeCosts::default();
        let result = cheapest_candidates(&candidates, 2, &distances, &costs, DEFAULT_MIN_LENGTH_KM);
        assert_eq!(result[&LineMode::Metro].len(), 2);
        assert_eq!(result[&LineMode::Tram].len(), 2);

        let none = cheapest_candidates(&candidates, 0, &distances, &costs, DEFAULT_MIN_LENGTH_KM);
        assert!(none.values().all(|v| v.is_empty()));
    }
}
