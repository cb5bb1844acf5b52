//! A form session: engine state wired to an Entry Store Bridge
//!
//! Intents are processed one at a time, to completion. After each reduction that changed
//! the record list the whole list is written back through the bridge.

use super::intent::Intent;
use super::reducer::{reduce, Outcome};
use super::state::FormState;
use super::view::FormView;
use crate::storage::{EntryStoreBridge, RecordStore, StorageHealth};
use tracing::{info, warn};

pub struct FormSession<S: RecordStore + ?Sized> {
    state: FormState,
    bridge: EntryStoreBridge<S>,
    health: StorageHealth,
}

impl<S: RecordStore + ?Sized> FormSession<S> {
    /// Start a session from whatever the bridge can load
    pub fn open(bridge: EntryStoreBridge<S>) -> Self {
        let records = bridge.load();
        Self {
            state: FormState::with_records(records),
            bridge,
            health: StorageHealth::Healthy,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn health(&self) -> &StorageHealth {
        &self.health
    }

    pub fn view(&self) -> FormView {
        FormView::from_state(&self.state, &self.health)
    }

    /// Apply one intent, persisting the record list if it changed
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        let reduction = reduce(&self.state, intent);
        self.state = reduction.state;

        match &reduction.outcome {
            Outcome::Appended { index } => info!(index, "entry added"),
            Outcome::Replaced { index } => info!(index, "entry updated"),
            Outcome::Deleted {
                index,
                discarded_edit,
            } => info!(index, discarded_edit, "entry deleted"),
            Outcome::Ignored(reason) => warn!(?reason, "intent ignored"),
            _ => {}
        }

        if reduction.records_changed {
            let health = self.bridge.save(&self.state.records);
            if health.is_degraded() && !self.health.is_degraded() {
                warn!(%health, "storage degraded, entries are kept in memory");
            } else if !health.is_degraded() && self.health.is_degraded() {
                info!("storage recovered");
            }
            self.health = health;
        }

        reduction.outcome
    }

    /// Apply a sequence of intents, returning the last outcome
    pub fn dispatch_all<I>(&mut self, intents: I) -> Option<Outcome>
    where
        I: IntoIterator<Item = Intent>,
    {
        intents.into_iter().map(|intent| self.dispatch(intent)).last()
    }
}
