use super::seed_location;
use crate::domain::error::DomainError;
use crate::domain::ports::seed_source::SeedSource;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads `bets.json` from a local directory (a checkout's `public/` folder).
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(base_dir: &str) -> Self {
        Self {
            path: PathBuf::from(seed_location(base_dir)),
        }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, DomainError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Seed(format!("{}: {e}", self.path.display())))
    }
}
