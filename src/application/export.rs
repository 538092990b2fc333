use crate::domain::entities::bet::Bet;
use crate::domain::error::DomainError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

/// A downloadable snapshot of the ledger.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

impl ExportArtifact {
    pub fn new(bets: &[Bet], now: DateTime<Utc>) -> Result<Self, DomainError> {
        Ok(Self {
            file_name: export_file_name(now),
            contents: serde_json::to_string_pretty(bets)?,
        })
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, DomainError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)
            .map_err(|e| DomainError::Storage(format!("{}: {e}", path.display())))?;
        Ok(path)
    }
}

/// `bets-export-2024-09-05T12-30-00-000Z.json`: millisecond UTC timestamp with
/// `:` and `.` replaced so the name is valid on every filesystem.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    let ts = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("bets-export-{ts}.json")
}
