use crate::application::export::ExportArtifact;
use crate::application::persistence::PersistenceGateway;
use crate::domain::entities::bet::Bet;
use crate::domain::error::DomainError;
use crate::domain::values::balance::BalanceSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Where the ledger is in its load cycle.
///
/// The store is only written in `Loaded`, so an empty collection held while
/// the seed is in flight can never overwrite device data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Uninitialized,
    Reseeding,
    Loaded,
}

/// The in-memory bet collection, newest first, and the commands that change it.
pub struct Ledger {
    gateway: PersistenceGateway,
    bets: Vec<Bet>,
    state: LoadState,
}

impl Ledger {
    pub fn new(gateway: PersistenceGateway) -> Self {
        Self {
            gateway,
            bets: Vec::new(),
            state: LoadState::Uninitialized,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Adopt the device's stored bets, or fall back to the shared seed.
    pub async fn initialize(&mut self) {
        if let Some(stored) = self.gateway.load() {
            debug!(count = stored.len(), "loaded bets from device store");
            self.bets = stored;
            self.state = LoadState::Loaded;
            return;
        }
        self.reseed().await;
    }

    /// Normalize and prepend a bet. Returns the stored form.
    pub fn add_bet(&mut self, raw: &Value) -> Bet {
        let bet = Bet::normalize(raw);
        self.bets.insert(0, bet.clone());
        self.persist();
        bet
    }

    /// Merge `patch` over the bet at `index` and re-normalize it.
    pub fn update_bet_at(&mut self, index: usize, patch: &Value) -> Result<Bet, DomainError> {
        let Value::Object(updates) = patch else {
            return Err(DomainError::InvalidInput(
                "update must be a JSON object".into(),
            ));
        };
        let current = self.bets.get(index).ok_or_else(|| {
            DomainError::NotFound(format!(
                "No bet at index {index} ({} bets)",
                self.bets.len()
            ))
        })?;

        let mut merged = current.to_value();
        if let Value::Object(fields) = &mut merged {
            for (k, v) in updates {
                fields.insert(k.clone(), v.clone());
            }
        }
        let updated = Bet::normalize(&merged);
        self.bets[index] = updated.clone();
        self.persist();
        Ok(updated)
    }

    /// Drop this ledger's device data and start over from the shared seed.
    pub async fn clear_and_reseed(&mut self) {
        self.gateway.clear();
        self.bets.clear();
        self.reseed().await;
    }

    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::from_bets(&self.bets)
    }

    pub fn export(&self, now: DateTime<Utc>) -> Result<ExportArtifact, DomainError> {
        ExportArtifact::new(&self.bets, now)
    }

    async fn reseed(&mut self) {
        self.state = LoadState::Reseeding;
        debug!("reseeding from shared seed document");
        self.bets = self.gateway.fetch_seed().await;
        self.state = LoadState::Loaded;
        self.persist();
    }

    fn persist(&self) {
        if self.state == LoadState::Loaded {
            self.gateway.save(&self.bets);
        } else {
            debug!(state = ?self.state, "skipping save until load completes");
        }
    }
}
