mod common;

use betledger::application::persistence::{PersistenceGateway, STORAGE_KEY};
use betledger::domain::entities::bet::Bet;
use betledger::domain::ports::key_value_store::KeyValueStore;
use betledger::domain::values::outcome::Outcome;
use betledger::infrastructure::memory_store::MemoryKeyValueStore;
use betledger::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use common::{StaticSeed, SEED};
use serde_json::json;
use std::sync::Arc;

fn gateway(store: Arc<dyn KeyValueStore>, seed: StaticSeed) -> PersistenceGateway {
    PersistenceGateway::new(store, Arc::new(seed))
}

#[test]
fn test_load_absent_for_unset_key() {
    let gw = gateway(Arc::new(MemoryKeyValueStore::new()), StaticSeed::new("[]"));
    assert!(gw.load().is_none());
}

#[test]
fn test_load_absent_for_malformed_data() {
    for raw in ["not json", "{}", "42", "\"[]\""] {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set(STORAGE_KEY, raw).unwrap();
        let gw = gateway(store, StaticSeed::new("[]"));
        assert!(gw.load().is_none(), "expected absent for {raw}");
    }
}

#[test]
fn test_load_normalizes_stored_records() {
    let store = Arc::new(MemoryKeyValueStore::new());
    store
        .set(
            STORAGE_KEY,
            r#"[{"week":"4","date":"2024-10-01","opponent":" Carol ","outcome":"lost","amount":"7"}]"#,
        )
        .unwrap();
    let bets = gateway(store, StaticSeed::new("[]")).load().unwrap();
    assert_eq!(bets.len(), 1);
    assert_eq!(bets[0].week, 4);
    assert_eq!(bets[0].date, "10/01/2024");
    assert_eq!(bets[0].opponent, "Carol");
    assert_eq!(bets[0].outcome, Outcome::Pending);
    assert_eq!(bets[0].amount, 7.0);
}

#[test]
fn test_empty_array_is_present() {
    let store = Arc::new(MemoryKeyValueStore::new());
    store.set(STORAGE_KEY, "[]").unwrap();
    assert_eq!(gateway(store, StaticSeed::new("[]")).load(), Some(vec![]));
}

#[test]
fn test_save_then_load() {
    let gw = gateway(Arc::new(MemoryKeyValueStore::new()), StaticSeed::new("[]"));
    let bets = vec![
        Bet::normalize(&json!({ "week": 1, "opponent": "Alice", "outcome": "win", "amount": 10 })),
        Bet::normalize(&json!({ "week": 2, "opponent": "Bob", "outcome": "loss", "amount": 2.5 })),
    ];
    gw.save(&bets);
    assert_eq!(gw.load(), Some(bets));
}

#[test]
fn test_clear_then_load_is_absent() {
    let store = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    let gw = gateway(store, StaticSeed::new("[]"));
    gw.save(&[Bet::normalize(&json!({ "week": 1 }))]);
    assert!(gw.load().is_some());
    gw.clear();
    assert!(gw.load().is_none());
}

#[test]
fn test_clear_keeps_unrelated_keys() {
    let store = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    store.set("other-app:settings", r#"{"theme":"dark"}"#).unwrap();
    let gw = gateway(store.clone(), StaticSeed::new("[]"));
    gw.save(&[]);
    gw.clear();
    assert_eq!(
        store.get("other-app:settings").unwrap().as_deref(),
        Some(r#"{"theme":"dark"}"#)
    );
}

#[test]
fn test_custom_key_is_isolated() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let seed = Arc::new(StaticSeed::new("[]"));
    let a = PersistenceGateway::with_key(store.clone(), seed.clone(), "ledger-a");
    let b = PersistenceGateway::with_key(store, seed, "ledger-b");
    a.save(&[Bet::normalize(&json!({ "week": 9 }))]);
    assert!(b.load().is_none());
    assert_eq!(a.load().map(|bets| bets.len()), Some(1));
}

#[tokio::test]
async fn test_fetch_seed_normalizes() {
    let gw = gateway(Arc::new(MemoryKeyValueStore::new()), StaticSeed::new(SEED));
    let bets = gw.fetch_seed().await;
    assert_eq!(bets.len(), 3);
    assert_eq!(bets[0].date, "09/08/2024");
    assert_eq!(bets[2].outcome, Outcome::Pending);
}

#[tokio::test]
async fn test_fetch_seed_failures_are_empty() {
    let failing = gateway(Arc::new(MemoryKeyValueStore::new()), StaticSeed::failing());
    assert!(failing.fetch_seed().await.is_empty());

    for body in ["<html>404</html>", r#"{"bets": []}"#, ""] {
        let gw = gateway(Arc::new(MemoryKeyValueStore::new()), StaticSeed::new(body));
        assert!(gw.fetch_seed().await.is_empty(), "expected empty for {body}");
    }
}
