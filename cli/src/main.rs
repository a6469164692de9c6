//! Terminal front-end for the reelhouse slot machine.
//!
//! Owns the session lifecycle the engine deliberately leaves outside: state
//! is loaded from a JSON file before each command and saved back after, so
//! the engine itself never touches disk or the process environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use reelhouse_engine::{
    accept_spin, reset_session, run_auto_spin, write_history_csv, AutoSpinConfig, ReelRng,
    StopFlag, SystemClock, TIMESTAMP_FORMAT,
};
use reelhouse_types::SessionState;

#[derive(Parser)]
#[command(name = "reelhouse", about = "Play-money slot machine in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Session file, created on first use
    #[arg(long, default_value = "reelhouse-session.json")]
    session: PathBuf,
    /// Log engine events at debug level
    #[arg(long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Spin once
    Spin {
        #[arg(long, default_value_t = 10)]
        bet: u64,
    },
    /// Run a bounded auto-spin session
    Auto {
        #[arg(long, default_value_t = 10)]
        bet: u64,
        #[arg(long, default_value_t = 10)]
        count: u32,
        /// Pause between spins, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
    /// Reset the balance and clear the history
    Reset,
    /// Show the balance and the last result
    Status,
    /// Print recent spins, most recent first
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Export the full history as CSV
    Export { path: PathBuf },
}

fn load_session(path: &Path) -> Result<SessionState> {
    if !path.exists() {
        return Ok(SessionState::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading session file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing session file {}", path.display()))
}

fn save_session(path: &Path, session: &SessionState) -> Result<()> {
    let raw = serde_json::to_string_pretty(session)?;
    fs::write(path, raw).with_context(|| format!("writing session file {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut session = load_session(&cli.session)?;
    let mut rng = ReelRng::from_entropy();
    let clock = SystemClock;

    match cli.command {
        Commands::Spin { bet } => match accept_spin(&mut session, bet, &mut rng, &clock) {
            Ok(record) => {
                println!("{}", record.reels);
                println!("{}", session.last_message);
            }
            Err(err) => println!("Spin rejected: {err}"),
        },
        Commands::Auto {
            bet,
            count,
            delay_ms,
        } => {
            let config = AutoSpinConfig {
                bet,
                count,
                delay: Duration::from_millis(delay_ms),
            };
            let stop = StopFlag::new();
            match run_auto_spin(&mut session, &config, &stop, &mut rng, &clock) {
                Ok(summary) => {
                    println!("{}", summary.banner());
                    println!("Balance: {} coins", session.balance);
                }
                Err(err) => println!("Auto-spin rejected: {err}"),
            }
        }
        Commands::Reset => {
            reset_session(&mut session);
            println!("{}", session.last_message);
        }
        Commands::Status => {
            println!("Balance: {} coins", session.balance);
            match &session.last_outcome {
                Some(reels) => println!("Last reels: {reels}"),
                None => println!("Last reels: - - -"),
            }
            if !session.last_message.is_empty() {
                println!("{}", session.last_message);
            }
        }
        Commands::History { limit } => {
            if session.history.is_empty() {
                println!("No spins yet.");
            }
            for record in session.history.iter().take(limit) {
                println!(
                    "{} | {} | bet={} win={} balance={} | {}",
                    record.timestamp.format(TIMESTAMP_FORMAT),
                    record.reels,
                    record.bet,
                    record.win,
                    record.balance_after,
                    record.message
                );
            }
        }
        Commands::Export { path } => {
            let file = fs::File::create(&path)
                .with_context(|| format!("creating export file {}", path.display()))?;
            write_history_csv(&session, file)?;
            println!(
                "Exported {} spins to {}",
                session.history.len(),
                path.display()
            );
        }
    }

    save_session(&cli.session, &session)?;
    Ok(())
}
