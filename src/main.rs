use betledger::application::entry::{BetEdit, BetInput};
use betledger::cli::commands::{Cli, Commands};
use betledger::config::LedgerConfig;
use betledger::domain::values::money::{format_currency, format_currency_unsigned};
use betledger::BetTracker;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = LedgerConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let mut tracker = match BetTracker::new(&config) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("Error opening ledger: {e}");
            std::process::exit(1);
        }
    };
    tracker.initialize().await;

    if let Err(e) = run_command(&mut tracker, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    tracker: &mut BetTracker,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::List => {
            for (i, bet) in tracker.bets().iter().enumerate() {
                let amount = if bet.is_pending() {
                    format_currency_unsigned(bet.amount)
                } else {
                    format_currency(bet.signed_amount())
                };
                println!(
                    "{i:>3}  wk {:<2}  {}  {:<24}  {:<12}  {:<7}  {amount}",
                    bet.week, bet.date, bet.description, bet.opponent, bet.outcome
                );
            }
        }
        Commands::Add {
            week,
            date,
            description,
            opponent,
            outcome,
            amount,
        } => {
            let input = BetInput {
                week,
                date,
                description,
                opponent,
                outcome,
                amount,
            };
            let bet = tracker.add_entry(&input)?;
            println!("{}", serde_json::to_string_pretty(&bet)?);
        }
        Commands::Update {
            index,
            outcome,
            amount,
        } => {
            let current = tracker
                .bets()
                .get(index)
                .ok_or_else(|| format!("No bet at index {index}"))?;
            let edit = BetEdit {
                outcome: outcome.unwrap_or_else(|| current.outcome.to_string()),
                amount: amount.unwrap_or_else(|| current.amount.abs().to_string()),
            };
            let bet = tracker.edit_bet_at(index, &edit)?;
            println!("{}", serde_json::to_string_pretty(&bet)?);
        }
        Commands::Summary { json } => {
            let summary = tracker.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Total Balance: {}", format_currency(summary.total));
                if summary.per_opponent.is_empty() {
                    println!("No opponents yet.");
                }
                for o in &summary.per_opponent {
                    println!("  {:<20} {}", o.name, format_currency(o.balance));
                }
            }
        }
        Commands::Export { out_dir } => {
            let artifact = tracker.export()?;
            let path = artifact.write_to(&out_dir)?;
            println!("Exported {} bets to {}", tracker.bets().len(), path.display());
        }
        Commands::Reset => {
            tracker.clear_and_reseed().await;
            println!("Ledger reset with {} seed bets", tracker.bets().len());
        }
    }
    Ok(())
}
