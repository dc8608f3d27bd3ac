//! # Acquisition State
//!
//! Tracks which gifts are acquired, and which of those the user picked
//! directly. Synthesis gifts cascade to their ingredients one level deep:
//!
//! - acquiring a synthesis gift marks its ingredients acquired, but not manual
//! - releasing it releases those ingredients, except ones picked manually
//!
//! Ingredients of ingredients are never touched. `manual ⊆ acquired` holds
//! after every operation.

use crate::model::{Gift, GiftId};
use crate::plan::Plan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Acquired,
    Released,
    /// The id is not part of the current plan; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquisitionState {
    acquired: BTreeSet<GiftId>,
    manual: BTreeSet<GiftId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub acquired: usize,
    pub total: usize,
}

impl AcquisitionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquired(&self) -> &BTreeSet<GiftId> {
        &self.acquired
    }

    pub fn manual(&self) -> &BTreeSet<GiftId> {
        &self.manual
    }

    pub fn is_acquired(&self, id: GiftId) -> bool {
        self.acquired.contains(&id)
    }

    pub fn is_manual(&self, id: GiftId) -> bool {
        self.manual.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.acquired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acquired.is_empty()
    }

    pub fn clear(&mut self) {
        self.acquired.clear();
        self.manual.clear();
    }

    pub fn toggle(&mut self, plan: &Plan, id: GiftId) -> Toggle {
        if !plan.contains(id) {
            log::debug!("toggle ignored: gift {} is not in plan {}", id, plan.key());
            return Toggle::Ignored;
        }

        let cascade = if plan.is_synthesis(id) {
            plan.ingredients(id)
        } else {
            &[]
        };

        if self.acquired.contains(&id) {
            self.acquired.remove(&id);
            self.manual.remove(&id);
            for ingredient in cascade {
                if !self.manual.contains(ingredient) {
                    self.acquired.remove(ingredient);
                }
            }
            log::debug!("released {} (cascade {:?})", id, cascade);
            Toggle::Released
        } else {
            self.acquired.insert(id);
            self.manual.insert(id);
            self.acquired.extend(cascade.iter().copied());
            log::debug!("acquired {} (cascade {:?})", id, cascade);
            Toggle::Acquired
        }
    }

    /// Whether an acquisition-order entry should show as acquired.
    pub fn order_entry_acquired(&self, plan: &Plan, entry: &Gift) -> bool {
        plan.order_entry_id(entry)
            .is_some_and(|id| self.is_acquired(id))
    }

    pub fn progress(&self, plan: &Plan) -> Progress {
        let total = plan.all_gifts().len();
        let acquired = plan
            .all_gifts()
            .iter()
            .filter(|g| g.id.is_some_and(|id| self.is_acquired(id)))
            .count();
        Progress { acquired, total }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            acquired: self.acquired.iter().copied().collect(),
            manual: self.manual.iter().copied().collect(),
            saved_at: Some(Utc::now()),
        }
    }
}

/// Persisted form of an [`AcquisitionState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub acquired: Vec<GiftId>,
    pub manual: Vec<GiftId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl From<Snapshot> for AcquisitionState {
    fn from(snapshot: Snapshot) -> Self {
        let manual: BTreeSet<GiftId> = snapshot.manual.into_iter().collect();
        let mut acquired: BTreeSet<GiftId> = snapshot.acquired.into_iter().collect();
        acquired.extend(manual.iter().copied());
        Self { acquired, manual }
    }
}
