//! Command entry points shared by the binary and integration tests.

use crate::cli::PlayArgs;
use crate::config::{CONFIG_ENV_VAR, GameConfig};
use crate::console::Terminal;
use crate::session::{GameSession, Scoreboard};
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tictactoe_core::{Board, Position, Rule, strategy};
use tracing::{debug, info, instrument};

/// Resolves the effective config: file (from `--config` or the
/// environment), then command-line overrides.
#[instrument(skip_all)]
pub fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let path = args
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));

    let base = match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            debug!("No config file, using defaults");
            GameConfig::default()
        }
    };

    let config = args.apply(base);
    config.validate()?;
    Ok(config)
}

/// Runs interactive play on `terminal`.
#[instrument(skip_all)]
pub fn run_play(config: GameConfig, terminal: &mut dyn Terminal) -> Result<Scoreboard> {
    info!(?config, "Starting play session");
    let mut session = GameSession::from_config(config);
    session.play(terminal)
}

/// Computer move suggestion for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Cell number (1-9).
    pub cell: usize,
    /// Cell name.
    pub position: Position,
    /// Rule that chose the cell.
    pub rule: Rule,
}

/// Computes the computer's move for `board_text`.
///
/// Fails on unparseable text and on boards that are already won or full.
#[instrument]
pub fn suggest(board_text: &str, seed: Option<u64>) -> Result<Suggestion> {
    let board: Board = board_text.parse()?;
    if let Some(outcome) = board.outcome() {
        bail!("Board is already finished: {:?}", outcome);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let decision = strategy::decide(&board, &mut rng)?;
    Ok(Suggestion {
        cell: decision.position.cell(),
        position: decision.position,
        rule: decision.rule,
    })
}

/// Prints a suggestion as text or JSON.
pub fn run_suggest(
    board_text: &str,
    seed: Option<u64>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let suggestion = suggest(board_text, seed)?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&suggestion)?)?;
    } else {
        writeln!(
            out,
            "Computer plays square {} ({}, rule: {})",
            suggestion.cell,
            suggestion.position.label(),
            suggestion.rule
        )?;
    }
    Ok(())
}
