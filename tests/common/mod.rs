//! Shared test helpers.

use async_trait::async_trait;
use betledger::domain::error::DomainError;
use betledger::domain::ports::seed_source::SeedSource;
use betledger::infrastructure::memory_store::MemoryKeyValueStore;
use betledger::BetTracker;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Seed source serving a fixed body, or failing when `body` is `None`.
pub struct StaticSeed {
    body: Option<String>,
    fetches: AtomicUsize,
}

impl StaticSeed {
    pub fn new(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    fn location(&self) -> String {
        "static://bets.json".into()
    }

    async fn fetch(&self) -> Result<String, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or_else(|| DomainError::Seed("seed unavailable".into()))
    }
}

pub const SEED: &str = r#"[
    {"week": 1, "date": "2024-09-08", "description": "Moneyline", "opponent": "Alice", "outcome": "win", "amount": 10},
    {"week": 1, "date": "09/08/2024", "description": "Over 45.5", "opponent": "Bob", "outcome": "loss", "amount": 5},
    {"week": 2, "date": "09/15/2024", "description": "Spread", "opponent": "Alice", "outcome": "pending", "amount": 20}
]"#;

pub fn setup_with(
    store: Arc<MemoryKeyValueStore>,
    seed: Arc<StaticSeed>,
) -> BetTracker {
    BetTracker::with_providers(store, seed)
}

pub fn setup() -> (BetTracker, Arc<MemoryKeyValueStore>, Arc<StaticSeed>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    let seed = Arc::new(StaticSeed::new(SEED));
    (setup_with(store.clone(), seed.clone()), store, seed)
}
