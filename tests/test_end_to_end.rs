use betledger::application::ledger::LoadState;
use betledger::config::LedgerConfig;
use betledger::domain::values::money::format_currency;
use betledger::BetTracker;
use serde_json::json;

fn config_in(dir: &std::path::Path) -> LedgerConfig {
    LedgerConfig {
        db_path: dir.join("ledger.db").to_string_lossy().into_owned(),
        base_url: dir.join("public").to_string_lossy().into_owned(),
        ..LedgerConfig::default()
    }
}

#[tokio::test]
async fn test_sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("public")).unwrap();
    std::fs::write(
        dir.path().join("public").join("bets.json"),
        r#"[{"week":1,"date":"2024-09-08","description":"Moneyline","opponent":"Alice","outcome":"win","amount":10}]"#,
    )
    .unwrap();
    let config = config_in(dir.path());

    {
        let mut tracker = BetTracker::new(&config).unwrap();
        tracker.initialize().await;
        assert_eq!(tracker.bets().len(), 1);
        tracker.add_bet(&json!({
            "week": 2, "date": "09/15/2024", "description": "Spread",
            "opponent": "alice ", "outcome": "loss", "amount": 4
        }));
    }

    // Seed file changes are ignored once the device has data.
    std::fs::write(dir.path().join("public").join("bets.json"), "[]").unwrap();

    let mut tracker = BetTracker::new(&config).unwrap();
    tracker.initialize().await;
    assert_eq!(tracker.state(), LoadState::Loaded);
    assert_eq!(tracker.bets().len(), 2);
    assert_eq!(tracker.bets()[0].opponent, "alice");

    let summary = tracker.summary();
    assert_eq!(format_currency(summary.total), "+$6.00");
    let names: Vec<&str> = summary.per_opponent.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "Alice"]);
}

#[tokio::test]
async fn test_missing_seed_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = BetTracker::new(&config_in(dir.path())).unwrap();
    tracker.initialize().await;
    assert_eq!(tracker.state(), LoadState::Loaded);
    assert!(tracker.bets().is_empty());
    assert!(tracker.summary().per_opponent.is_empty());
}

#[tokio::test]
async fn test_reset_reloads_seed_into_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("public")).unwrap();
    let seed_path = dir.path().join("public").join("bets.json");
    std::fs::write(&seed_path, "[]").unwrap();
    let config = config_in(dir.path());

    let mut tracker = BetTracker::new(&config).unwrap();
    tracker.initialize().await;
    tracker.add_bet(&json!({ "week": 1, "opponent": "Bob", "outcome": "win", "amount": 2 }));

    let reseeded = r#"[{"week":3,"opponent":"Carol","outcome":"loss","amount":1}]"#;
    std::fs::write(&seed_path, reseeded).unwrap();
    tracker.clear_and_reseed().await;

    let mut reopened = BetTracker::new(&config).unwrap();
    reopened.initialize().await;
    assert_eq!(reopened.bets().len(), 1);
    assert_eq!(reopened.bets()[0].opponent, "Carol");
}
