use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seabed_agent::{AgentConfig, TurnEngine};
use seabed_bot::game_loop;
use seabed_bot::protocol::ProtocolReader;

/// Seabed scanning bot. Reads the referee protocol on stdin, writes
/// commands on stdout, logs to stderr.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON agent config. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the exploration seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `debug` or `seabed_agent=trace`. Defaults to RUST_LOG, then `info`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid --log-level: {level}"))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            AgentConfig::from_json(&text)
                .with_context(|| format!("invalid config: {}", path.display()))?
        }
        None => AgentConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let stdin = io::stdin();
    let mut reader = ProtocolReader::new(stdin.lock());
    let catalogue = reader.read_catalogue()?;
    tracing::info!(fish = catalogue.len(), seed = config.seed, "game started");

    let mut engine = TurnEngine::new(config, catalogue)?;
    let turns = game_loop::run(&mut engine, &mut reader, &mut io::stdout().lock())?;

    tracing::info!(turns, scanned = engine.ledger().len(), "game over");
    Ok(())
}
