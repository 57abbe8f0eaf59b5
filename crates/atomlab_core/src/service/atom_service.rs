//! Atom snapshot use-case service.
//!
//! # Responsibility
//! - Save the engine's current configuration and restore engines from it.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Restored engines start with a fresh history.

use crate::engine::atom_engine::{AtomEngine, EngineConfig};
use crate::engine::random::RandomSource;
use crate::model::atom::AtomConfiguration;
use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository};
use log::info;

/// Use-case wrapper around a snapshot repository.
pub struct AtomService<R: SnapshotRepository> {
    repo: R,
}

impl<R: SnapshotRepository> AtomService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists the engine's current configuration under `slot`.
    pub fn save_engine<G: RandomSource>(
        &self,
        slot: &str,
        engine: &AtomEngine<G>,
    ) -> RepoResult<AtomConfiguration> {
        let config = engine.configuration();
        self.repo.save_snapshot(slot, &config)?;
        Ok(config)
    }

    /// Builds an engine from the snapshot in `slot`, or from `config.defaults`
    /// when the slot is empty.
    pub fn restore_engine<G: RandomSource>(
        &self,
        slot: &str,
        config: EngineConfig,
        random: G,
    ) -> RepoResult<AtomEngine<G>> {
        match self.repo.load_snapshot(slot)? {
            Some(snapshot) => {
                info!("event=snapshot_restore module=service status=ok slot={}", slot.trim());
                Ok(AtomEngine::from_configuration(config, snapshot, random))
            }
            None => {
                info!(
                    "event=snapshot_restore module=service status=missing slot={}",
                    slot.trim()
                );
                Ok(AtomEngine::with_random(config, random))
            }
        }
    }

    pub fn load_snapshot(&self, slot: &str) -> RepoResult<Option<AtomConfiguration>> {
        self.repo.load_snapshot(slot)
    }

    pub fn delete_snapshot(&self, slot: &str) -> RepoResult<()> {
        self.repo.delete_snapshot(slot)
    }

    pub fn list_slots(&self) -> RepoResult<Vec<String>> {
        self.repo.list_slots()
    }
}
