use crate::model::candidate::Improvement;
use std::cmp::Ordering;

/// the `capacity` best-scoring improvements seen so far.
///
/// entries carry the position of their candidate in the evaluation order.
/// ranking is by descending score, then ascending position, which makes the
/// retained set independent of how candidates were split across workers.
#[derive(Debug, Clone)]
pub struct TopImprovements {
    capacity: usize,
    entries: Vec<(usize, Improvement)>,
}

impl TopImprovements {
    pub fn new(capacity: usize) -> TopImprovements {
        TopImprovements {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn min_score(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(_, imp)| imp.score)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// adds an improvement while below capacity. once full, an improvement
    /// is only added if it scores strictly higher than the current minimum,
    /// which is then evicted. returns whether the improvement was kept.
    pub fn offer(&mut self, seq: usize, improvement: Improvement) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.entries.len() < self.capacity {
            self.entries.push((seq, improvement));
            return true;
        }
        match self.min_score() {
            Some(min) if improvement.score > min => {
                self.entries.push((seq, improvement));
                self.entries.sort_by(rank);
                self.entries.truncate(self.capacity);
                true
            }
            _ => false,
        }
    }

    /// combines two partial results into the best `capacity` of both.
    pub fn merge(mut self, other: TopImprovements) -> TopImprovements {
        self.entries.extend(other.entries);
        self.entries.sort_by(rank);
        self.entries.truncate(self.capacity);
        self
    }

    /// the retained improvements, best first.
    pub fn into_sorted(mut self) -> Vec<Improvement> {
        self.entries.sort_by(rank);
        self.entries.into_iter().map(|(_, imp)| imp).collect()
    }
}

fn rank(a: &(usize, Improvement), b: &(usize, Improvement)) -> Ordering {
    b.1.score.total_cmp(&a.1.score).then(a.0.cmp(&b.0))
}
