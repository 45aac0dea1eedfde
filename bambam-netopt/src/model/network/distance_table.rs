use super::{GeoLookup, StopId};
use crate::model::NetoptError;
use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;
use std::collections::HashMap;

/// read access to stop-to-stop great-circle distances in kilometers.
pub trait DistanceLookup {
    /// distance between two stops. the distance from a stop to itself is 0.
    fn distance_km(&self, a: &StopId, b: &StopId) -> Result<f64, NetoptError>;
}

/// symmetric stop-to-stop distance table. every insert is stored in both
/// orientations so lookups never allocate.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DistanceTable {
    distances: HashMap<StopId, HashMap<StopId, f64>>,
}

impl DistanceTable {
    pub fn new() -> DistanceTable {
        DistanceTable {
            distances: HashMap::new(),
        }
    }

    pub fn insert(&mut self, a: &StopId, b: &StopId, distance_km: f64) {
        self.distances
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), distance_km);
        self.distances
            .entry(b.clone())
            .or_default()
            .insert(a.clone(), distance_km);
    }

    /// builds the table of haversine distances between every pair of stops
    /// in the geo lookup.
    pub fn from_geo_lookup(geo: &GeoLookup) -> DistanceTable {
        let stops = geo.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)).collect_vec();
        log::info!("computing haversine distances between {} stops", stops.len());
        let rows = (0..stops.len())
            .into_par_iter()
            .map(|i| {
                let (src, src_loc) = stops[i];
                let row = stops[i + 1..]
                    .iter()
                    .map(|(dst, dst_loc)| ((*dst).clone(), src_loc.haversine_km(dst_loc)))
                    .collect_vec();
                (src.clone(), row)
            })
            .collect::<Vec<_>>();

        let mut table = DistanceTable::new();
        let iter = tqdm!(
            rows.into_iter(),
            desc = "build distance table",
            total = stops.len()
        );
        for (src, row) in iter {
            table.distances.entry(src.clone()).or_default();
            for (dst, km) in row.into_iter() {
                table.insert(&src, &dst, km);
            }
        }
        eprintln!();
        table
    }

    /// true if the stop has a row in the table
    pub fn contains_stop(&self, stop: &StopId) -> bool {
        self.distances.contains_key(stop)
    }

    /// number of stops covered by the table
    pub fn n_stops(&self) -> usize {
        self.distances.len()
    }
}

impl DistanceLookup for DistanceTable {
    fn distance_km(&self, a: &StopId, b: &StopId) -> Result<f64, NetoptError> {
        if a == b {
            return Ok(0.0);
        }
        self.distances
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .ok_or_else(|| NetoptError::MissingDistance(a.clone(), b.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::StopLocation;

    #[test]
    fn test_symmetric_insert() {
        let a = StopId::from("1 - A");
        let b = StopId::from("1 - B");
        let mut table = DistanceTable::new();
        table.insert(&a, &b, 3.5);
        assert_eq!(table.distance_km(&a, &b).unwrap(), 3.5);
        assert_eq!(table.distance_km(&b, &a).unwrap(), 3.5);
        assert_eq!(table.distance_km(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_distance() {
        let table = DistanceTable::new();
        let result = table.distance_km(&StopId::from("1 - A"), &StopId::from("1 - B"));
        assert!(matches!(result, Err(NetoptError::MissingDistance(_, _))));
    }

    #[test]
    fn test_from_geo_lookup_is_total() {
        let geo: GeoLookup = [
            (StopId::from("1 - A"), StopLocation::new(48.85, 2.30)),
            (StopId::from("1 - B"), StopLocation::new(48.85, 2.40)),
            (StopId::from("2 - C"), StopLocation::new(48.90, 2.35)),
        ]
        .into_iter()
        .collect();
        let table = DistanceTable::from_geo_lookup(&geo);
        assert_eq!(table.n_stops(), 3);
        for (a, loc_a) in geo.iter() {
            for (b, loc_b) in geo.iter() {
                let expected = if a == b { 0.0 } else { loc_a.haversine_km(loc_b) };
                let found = table.distance_km(a, b).unwrap();
                assert!((found - expected).abs() < 1e-9);
            }
        }
    }
}
