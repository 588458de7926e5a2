use hashbrown::HashMap as FastHashMap;

use super::CounterMetrics;
use crate::generator::TieBreak;
use crate::shape::{Shape, ShapeKey, ShapeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeEntry {
    pub shape: Shape,
    pub count: usize,
}

/// Counts shapes per structural class, keeping the widest bounds seen for each class.
///
/// Entries are kept in first-seen order; the map only indexes into them, so no two
/// entries are ever structurally equal.
#[derive(Debug, Default, Clone)]
pub struct ShapeCounter {
    index: FastHashMap<ShapeKey, usize>,
    entries: Vec<ShapeEntry>,
    metrics: CounterMetrics,
}

impl ShapeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(level = "trace", skip(self, shape), fields(tokens = shape.len() as u64))]
    pub fn absorb(&mut self, shape: Shape) -> ShapeResult<()> {
        let key = shape.key();

        match self.index.get(&key).copied() {
            None => {
                tracing::event!(tracing::Level::TRACE, operation = "absorb", outcome = "new_class", shape = %shape);
                self.index.insert(key, self.entries.len());
                self.entries.push(ShapeEntry { shape, count: 1 });
                self.metrics.record_new_class();
            }
            Some(slot) => {
                let entry = &mut self.entries[slot];
                if entry.shape == shape {
                    self.metrics.record_exact_repeat();
                } else {
                    let combined = entry.shape.widen(&shape)?;
                    tracing::event!(tracing::Level::TRACE, operation = "absorb", outcome = "widened", from = %entry.shape, to = %combined);
                    entry.shape = combined;
                    self.metrics.record_widening();
                }
                entry.count += 1;
            }
        }

        Ok(())
    }

    /// Folds `other` into `self` with the same rule `absorb` uses, summing counts.
    /// Classes only present in `other` are appended after `self`'s, in `other`'s order.
    pub fn merge(&mut self, other: ShapeCounter) -> ShapeResult<()> {
        for ShapeEntry { shape, count } in other.entries {
            let key = shape.key();
            match self.index.get(&key).copied() {
                None => {
                    self.index.insert(key, self.entries.len());
                    self.entries.push(ShapeEntry { shape, count });
                }
                Some(slot) => {
                    let entry = &mut self.entries[slot];
                    if entry.shape != shape {
                        entry.shape = entry.shape.widen(&shape)?;
                    }
                    entry.count += count;
                }
            }
        }
        self.metrics.combine(&other.metrics);
        Ok(())
    }

    pub fn count_of(&self, shape: &Shape) -> Option<usize> {
        self.index
            .get(&shape.key())
            .map(|&slot| self.entries[slot].count)
    }

    pub fn get(&self, key: &ShapeKey) -> Option<&ShapeEntry> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> &CounterMetrics {
        &self.metrics
    }

    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// Entries by descending count. Equal counts are ordered by `tie_break`.
    pub fn ranked_entries(&self, tie_break: TieBreak) -> Vec<ShapeEntry> {
        let mut ranked = self.entries.clone();
        match tie_break {
            // stable sort keeps first-seen order among equal counts
            TieBreak::FirstSeen => ranked.sort_by(|a, b| b.count.cmp(&a.count)),
            TieBreak::Canonical => ranked.sort_by_cached_key(|e| {
                (std::cmp::Reverse(e.count), e.shape.to_string())
            }),
        }
        ranked
    }

    pub fn ranked_shapes(&self, tie_break: TieBreak) -> Vec<Shape> {
        self.ranked_entries(tie_break)
            .into_iter()
            .map(|e| e.shape)
            .collect()
    }
}
