use crate::application::persistence::STORAGE_KEY;

/// Runtime settings, read from the environment with CLI overrides on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// SQLite file backing the per-device store.
    pub db_path: String,
    /// Base that `bets.json` is resolved against (URL or directory).
    pub base_url: String,
    pub storage_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            db_path: "./betledger.db".into(),
            base_url: "./public/".into(),
            storage_key: STORAGE_KEY.into(),
        }
    }
}

impl LedgerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            db_path: non_empty("BETLEDGER_DB").unwrap_or(defaults.db_path),
            base_url: non_empty("BETLEDGER_BASE_URL").unwrap_or(defaults.base_url),
            storage_key: non_empty("BETLEDGER_STORAGE_KEY").unwrap_or(defaults.storage_key),
        }
    }
}
