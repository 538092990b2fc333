use crate::domain::entities::bet::Bet;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::ports::seed_source::SeedSource;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key under which the ledger lives in the per-device store.
pub const STORAGE_KEY: &str = "nfl-bet-tracker:bets";

/// Best-effort persistence for the bet collection.
///
/// Nothing here returns an error: unreadable device data is reported as
/// absent, failed writes are logged and dropped, and a failed seed fetch
/// yields an empty collection. Every bet handed out has been normalized.
pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
    seed: Arc<dyn SeedSource>,
    key: String,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn KeyValueStore>, seed: Arc<dyn SeedSource>) -> Self {
        Self::with_key(store, seed, STORAGE_KEY)
    }

    pub fn with_key(
        store: Arc<dyn KeyValueStore>,
        seed: Arc<dyn SeedSource>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            seed,
            key: key.into(),
        }
    }

    /// `None` when the key is unset, unreadable, not JSON, or not a JSON array.
    pub fn load(&self) -> Option<Vec<Bet>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored bets");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored bets");
                return None;
            }
        };
        let bets = parse_bet_array(&raw);
        if bets.is_none() {
            warn!(key = %self.key, "stored bets are not a JSON array, ignoring");
        }
        bets
    }

    pub fn save(&self, bets: &[Bet]) {
        let json = match serde_json::to_string(bets) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize bets");
                return;
            }
        };
        match self.store.set(&self.key, &json) {
            Ok(()) => debug!(key = %self.key, count = bets.len(), "saved bets"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to save bets"),
        }
    }

    pub async fn fetch_seed(&self) -> Vec<Bet> {
        let location = self.seed.location();
        let body = match self.seed.fetch().await {
            Ok(body) => body,
            Err(e) => {
                warn!(%location, error = %e, "seed fetch failed");
                return Vec::new();
            }
        };
        match parse_bet_array(&body) {
            Some(bets) => {
                debug!(%location, count = bets.len(), "fetched seed bets");
                bets
            }
            None => {
                warn!(%location, "seed document is not a JSON array");
                Vec::new()
            }
        }
    }

    /// Remove only this ledger's key; other data in the store is left alone.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear stored bets");
        }
    }
}

/// Parse a JSON array of bet-like objects, normalizing each element.
pub fn parse_bet_array(text: &str) -> Option<Vec<Bet>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Some(items.iter().map(Bet::normalize).collect()),
        _ => None,
    }
}
