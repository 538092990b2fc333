pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::entry::{BetEdit, BetInput};
use crate::application::export::ExportArtifact;
use crate::application::ledger::{Ledger, LoadState};
use crate::application::persistence::PersistenceGateway;
use crate::config::LedgerConfig;
use crate::domain::entities::bet::Bet;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::ports::seed_source::SeedSource;
use crate::domain::values::balance::BalanceSummary;
use crate::infrastructure::seed::seed_source_for;
use crate::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

pub struct BetTracker {
    ledger: Ledger,
}

impl BetTracker {
    /// Open the SQLite device store and seed source named by `config`.
    /// The ledger is not loaded until [`BetTracker::initialize`] runs.
    pub fn new(config: &LedgerConfig) -> Result<Self, DomainError> {
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::open(&config.db_path)?);
        let seed = seed_source_for(&config.base_url);
        Ok(Self::with_key(store, seed, &config.storage_key))
    }

    pub fn with_providers(store: Arc<dyn KeyValueStore>, seed: Arc<dyn SeedSource>) -> Self {
        Self {
            ledger: Ledger::new(PersistenceGateway::new(store, seed)),
        }
    }

    pub fn with_key(
        store: Arc<dyn KeyValueStore>,
        seed: Arc<dyn SeedSource>,
        key: &str,
    ) -> Self {
        Self {
            ledger: Ledger::new(PersistenceGateway::with_key(store, seed, key)),
        }
    }

    // Delegating methods
    pub async fn initialize(&mut self) {
        self.ledger.initialize().await
    }

    pub fn state(&self) -> LoadState {
        self.ledger.state()
    }

    pub fn bets(&self) -> &[Bet] {
        self.ledger.bets()
    }

    pub fn add_bet(&mut self, raw: &Value) -> Bet {
        self.ledger.add_bet(raw)
    }

    /// Validate user-entered fields, then add the bet.
    pub fn add_entry(&mut self, input: &BetInput) -> Result<Bet, DomainError> {
        let raw = input.validate()?;
        Ok(self.ledger.add_bet(&raw))
    }

    pub fn update_bet_at(&mut self, index: usize, patch: &Value) -> Result<Bet, DomainError> {
        self.ledger.update_bet_at(index, patch)
    }

    /// Validate an inline outcome/amount edit, then apply it.
    pub fn edit_bet_at(&mut self, index: usize, edit: &BetEdit) -> Result<Bet, DomainError> {
        let patch = edit.validate()?;
        self.ledger.update_bet_at(index, &patch)
    }

    pub async fn clear_and_reseed(&mut self) {
        self.ledger.clear_and_reseed().await
    }

    pub fn summary(&self) -> BalanceSummary {
        self.ledger.summary()
    }

    pub fn export(&self) -> Result<ExportArtifact, DomainError> {
        self.ledger.export(Utc::now())
    }
}
