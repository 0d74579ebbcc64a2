//! Print queue store

use std::fmt;

use serde::{Deserialize, Serialize};
use shared::models::{LabelDescriptor, LabelPatch, LabelPayload};
use shared::util::now_millis;

/// Ordered, mutable collection of queued labels
///
/// Ids start at 1, increase monotonically and are never reused, not even
/// after [`QueueStore::clear`]. Insertion order is preserved by every
/// mutation.
#[derive(Debug, Clone)]
pub struct QueueStore {
    entries: Vec<LabelDescriptor>,
    next_id: u64,
}

impl Default for QueueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a label and return its id. Always succeeds.
    pub fn add(&mut self, label: LabelPayload) -> u64 {
        self.add_at(label, now_millis())
    }

    /// Append with an explicit insertion timestamp (millis).
    ///
    /// A quantity below 1 is clamped to 1.
    pub fn add_at(&mut self, mut label: LabelPayload, added_at: i64) -> u64 {
        clamp_quantity(&mut label);

        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(
            label_id = id,
            label_type = %label.label_type(),
            quantity = label.quantity(),
            "Label queued"
        );
        self.entries.push(LabelDescriptor {
            id,
            label,
            added_at,
        });
        id
    }

    /// Remove the entry with `id`. Returns `false` (no-op) if absent.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!(label_id = id, "Label removed from queue");
                true
            }
            None => false,
        }
    }

    /// Drop every entry. Id numbering continues.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.entries.len(), "Queue cleared");
        self.entries.clear();
    }

    /// Merge `patch` into the entry's payload. Returns `false` (no-op) if absent.
    pub fn update(&mut self, id: u64, patch: &LabelPatch) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.label.apply_patch(patch);
                clamp_quantity(&mut entry.label);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&LabelDescriptor> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Current entries in queue order
    pub fn entries(&self) -> &[LabelDescriptor] {
        &self.entries
    }

    /// Owned copy of the current entries, in queue order
    pub fn snapshot(&self) -> Vec<LabelDescriptor> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> QueueSummary {
        QueueSummary::of(&self.entries)
    }
}

fn clamp_quantity(label: &mut LabelPayload) {
    if label.quantity() < 1 {
        tracing::warn!(quantity = label.quantity(), "Non-positive quantity clamped to 1");
        label.set_quantity(1);
    }
}

/// Queue totals shown above the print preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSummary {
    /// Number of queue entries
    pub entries: usize,
    /// Physical labels across all entries (sum of quantities)
    pub total_labels: i64,
}

impl QueueSummary {
    pub fn of(entries: &[LabelDescriptor]) -> Self {
        Self {
            entries: entries.len(),
            total_labels: entries
                .iter()
                .fold(0i64, |acc, e| acc.saturating_add(e.quantity().max(0))),
        }
    }
}

impl fmt::Display for QueueSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} label type(s) in queue ({} total labels)",
            self.entries, self.total_labels
        )
    }
}
