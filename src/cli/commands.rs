use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "betledger", about = "Track wagers against friends and see who owes whom")]
pub struct Cli {
    /// SQLite file holding this device's ledger (overrides BETLEDGER_DB)
    #[arg(long, global = true)]
    pub db: Option<String>,
    /// Base URL or directory containing the shared bets.json (overrides BETLEDGER_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List bets, newest first
    List,
    /// Add a bet
    Add {
        /// Week number (positive whole number)
        #[arg(long)]
        week: String,
        /// Date as MM/DD/YYYY or YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Bet type or description
        #[arg(long)]
        description: String,
        #[arg(long)]
        opponent: String,
        /// Outcome (win, loss, pending)
        #[arg(long, default_value = "pending")]
        outcome: String,
        /// Wager size; the sign comes from the outcome
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Edit the outcome and/or amount of a bet by its list index
    Update {
        /// Zero-based index as shown by `list`
        index: usize,
        /// New outcome (win, loss, pending)
        #[arg(long)]
        outcome: Option<String>,
        /// New wager size
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Show total and per-opponent balances
    Summary {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write all bets to a timestamped JSON file
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Clear this device's ledger and reload the shared seed data
    Reset,
}
