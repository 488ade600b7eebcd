//! Temporary overrides with a delayed revert.
//!
//! The copy button, a freshly inserted card and the contact section all get a
//! short-lived style that is undone after a delay. Each override arms a
//! [`RevertTicket`] keyed by its target; only the newest ticket for a target
//! may perform the revert, so a stale timer can never clear a newer override.

use std::collections::HashMap;

use crate::types::CardId;

/// Element a temporary override is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTarget {
    CopyButton,
    Card(CardId),
    ContactSection,
}

/// Handle returned when an override is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket {
    target: EffectTarget,
    generation: u64,
}

impl RevertTicket {
    pub fn target(&self) -> EffectTarget {
        self.target
    }
}

/// Newest armed generation per target.
#[derive(Debug, Default, Clone)]
pub struct PendingReverts {
    latest: HashMap<EffectTarget, u64>,
    counter: u64,
}

impl PendingReverts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a revert for `target`, superseding any pending one.
    pub fn arm(&mut self, target: EffectTarget) -> RevertTicket {
        // Generations are global so a settled target never reissues an old number.
        self.counter += 1;
        if self.latest.insert(target, self.counter).is_some() {
            tracing::debug!(effect = ?target, "superseded pending revert");
        }
        RevertTicket {
            target,
            generation: self.counter,
        }
    }

    /// Consume `ticket`. Returns `true` when it is still the newest for its
    /// target and the revert should be applied.
    pub fn settle(&mut self, ticket: RevertTicket) -> bool {
        match self.latest.get(&ticket.target) {
            Some(&generation) if generation == ticket.generation => {
                self.latest.remove(&ticket.target);
                true
            }
            _ => {
                tracing::debug!(effect = ?ticket.target, "dropped stale revert");
                false
            }
        }
    }

    pub fn is_pending(&self, target: EffectTarget) -> bool {
        self.latest.contains_key(&target)
    }
}
