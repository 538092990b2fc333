use super::seed_location;
use crate::domain::error::DomainError;
use crate::domain::ports::seed_source::SeedSource;
use async_trait::async_trait;
use std::time::Duration;

/// Reads `bets.json` from a web deployment, e.g. `https://host/nfl-bet-tracker/`.
pub struct HttpSeedSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSeedSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: seed_location(base_url),
            client: reqwest::Client::builder()
                .user_agent("betledger/0.1")
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, DomainError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Seed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Seed(format!(
                "{} returned {}",
                self.url,
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| DomainError::Seed(e.to_string()))
    }
}
