pub mod file;
pub mod http;

use crate::domain::ports::seed_source::SeedSource;
use std::sync::Arc;

/// Name of the shared seed document, resolved against the configured base.
pub const SEED_FILE_NAME: &str = "bets.json";

/// Join the base path and the seed document name, tolerating a missing
/// trailing slash on the base.
pub fn seed_location(base: &str) -> String {
    if base.is_empty() {
        SEED_FILE_NAME.to_string()
    } else if base.ends_with('/') {
        format!("{base}{SEED_FILE_NAME}")
    } else {
        format!("{base}/{SEED_FILE_NAME}")
    }
}

/// HTTP(S) bases are fetched over the network; anything else is a directory.
pub fn seed_source_for(base: &str) -> Arc<dyn SeedSource> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Arc::new(http::HttpSeedSource::new(base))
    } else {
        Arc::new(file::FileSeedSource::new(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_location_joining() {
        assert_eq!(seed_location("/nfl-bet-tracker/"), "/nfl-bet-tracker/bets.json");
        assert_eq!(seed_location("https://example.com/app"), "https://example.com/app/bets.json");
        assert_eq!(seed_location(""), "bets.json");
    }

    #[test]
    fn test_source_selection() {
        assert!(seed_source_for("https://example.com/").location().starts_with("https://"));
        assert_eq!(seed_source_for("./public/").location(), "./public/bets.json");
    }
}
