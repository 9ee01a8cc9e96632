//! Mastermind - CLI
//!
//! Code-breaking puzzle with TUI and simple line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::TypedValueParser as _};
use mastermind::{
    commands::{check_guess, run_simple},
    config::{DEFAULT_COLORS, DEFAULT_PLAYER, GameConfig},
    output::{format_scoreboard, print_check_result},
    scores::ScoreBoard,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the hidden four-color code",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors in the palette (4-10)
    #[arg(short, long, global = true, default_value_t = DEFAULT_COLORS,
          value_parser = clap::value_parser!(u8).range(4..=10).map(usize::from))]
    colors: usize,

    /// Seed for reproducible secrets
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Name recorded with your scores
    #[arg(short, long, global = true, default_value = DEFAULT_PLAYER)]
    player: String,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Evaluate one guess against a known secret
    Check {
        /// The secret, as color codes (e.g. RGBY) or names
        secret: String,

        /// The guess, as color codes (e.g. BGRY) or names
        guess: String,
    },
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr. The TUI owns the
/// terminal, so without a log file it gets no subscriber at all.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = GameConfig::new(cli.colors, cli.player, cli.seed)?;
    tracing::debug!(colors = config.palette.len(), seed = ?config.seed, "configuration loaded");

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
    }
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess)?;
    print_check_result(&result.secret, &result.guess, &result.feedback);
    Ok(())
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut source = config.pick_source();
    let mut scores = ScoreBoard::new();
    let stdin = io::stdin();

    run_simple(
        config,
        source.as_mut(),
        &mut scores,
        stdin.lock(),
        io::stdout(),
    )?;

    if !scores.is_empty() {
        print!("{}", format_scoreboard(&scores, None));
    }
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}
