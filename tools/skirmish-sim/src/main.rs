//! skirmish-sim: headless skirmish runner.
//!
//! Starts a skirmish from a TOML config, replays a JSON script of player
//! commands against a seeded engine, and prints the battle log.
//!
//! Usage:
//!   skirmish-sim scripts/opening.json --config skirmish.toml --seed 7
//!   skirmish-sim scripts/opening.json --json > snapshot.json

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use thiserror::Error;

use grimdark_core::commands::PlayerCommand;
use grimdark_core::enums::Player;
use grimdark_core::state::SkirmishConfig;
use grimdark_sim::{SimConfig, SkirmishEngine};

/// Replay a scripted skirmish and report the result
#[derive(Parser, Debug)]
#[command(name = "skirmish-sim")]
#[command(about = "Replay a scripted grimdark skirmish with seeded dice")]
struct Args {
    /// JSON array of player commands
    script: Option<PathBuf>,

    /// Skirmish config (factions and size) as TOML
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Dice seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the final snapshot as JSON instead of the battle log
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] grimdark_core::error::EngineError),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grimdark_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SkirmishConfig::default(),
    };
    let commands = match &args.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let mut engine = SkirmishEngine::new(SimConfig { seed: args.seed });
    engine.start_skirmish(config)?;
    tracing::info!("replaying {} commands with seed {}", commands.len(), args.seed);

    let mut rejected = 0;
    for (i, command) in commands.into_iter().enumerate() {
        if let Err(err) = engine.apply(command) {
            eprintln!("command {}: rejected: {}", i + 1, err);
            rejected += 1;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        return Ok(());
    }

    for entry in engine.battle_log().entries() {
        println!("[T{} {}] {}", entry.turn, entry.phase, entry.message);
    }

    let turn = engine.turn_state();
    println!();
    println!(
        "Turn {}, {} {} phase",
        turn.turn, turn.active_player, turn.phase
    );
    for player in Player::ALL {
        let units = engine
            .roster()
            .iter()
            .filter(|u| u.owner == player)
            .count();
        println!(
            "{}: {} VP, {} CP, {} units remaining",
            player,
            turn.victory_points.get(player),
            turn.command_points.get(player),
            units
        );
    }
    if rejected > 0 {
        println!("{rejected} commands rejected");
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<SkirmishConfig, CliError> {
    let text = read(path)?;
    toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn load_script(path: &Path) -> Result<Vec<PlayerCommand>, CliError> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::Script {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
