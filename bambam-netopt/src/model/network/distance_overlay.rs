use super::{DistanceLookup, DistanceTable, StopId};
use crate::model::NetoptError;
use std::collections::HashMap;

/// copy-on-write view over a shared [`DistanceTable`] that adds transient
/// stops. each transient stop is an alias of an existing stop: it sits at
/// distance 0 from itself and from that stop, and otherwise inherits the
/// stop's distances. the shared table is never modified, so concurrent
/// evaluations cannot observe each other's transient stops.
#[derive(Debug, Clone)]
pub struct DistanceOverlay<'a> {
    base: &'a DistanceTable,
    aliases: HashMap<StopId, StopId>,
}

impl<'a> DistanceOverlay<'a> {
    pub fn new(base: &'a DistanceTable) -> DistanceOverlay<'a> {
        DistanceOverlay {
            base,
            aliases: HashMap::new(),
        }
    }

    /// registers `stop` as co-located with `original`.
    pub fn insert_alias(&mut self, stop: StopId, original: StopId) {
        self.aliases.insert(stop, original);
    }

    pub fn n_aliases(&self) -> usize {
        self.aliases.len()
    }

    fn resolve<'b>(&'b self, stop: &'b StopId) -> &'b StopId {
        self.aliases.get(stop).unwrap_or(stop)
    }
}

impl DistanceLookup for DistanceOverlay<'_> {
    fn distance_km(&self, a: &StopId, b: &StopId) -> Result<f64, NetoptError> {
        if a == b {
            return Ok(0.0);
        }
        let (a_resolved, b_resolved) = (self.resolve(a), self.resolve(b));
        if a_resolved == b_resolved {
            return Ok(0.0);
        }
        self.base.distance_km(a_resolved, b_resolved)
    }
}
