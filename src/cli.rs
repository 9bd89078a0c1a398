//! Command-line interface for tictactoe.

use crate::config::{FirstPlayer, GameConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - play against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches in the terminal
    Play(PlayArgs),

    /// Print the computer's move for a given board
    Suggest {
        /// Nine cells, row by row: X, O, or . for empty (e.g. "XO./.X./...")
        board: String,

        /// Seed for the random fallback rule
        #[arg(long)]
        seed: Option<u64>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for `play`; each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file (falls back to $TICTACTOE_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who moves first each round
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Round wins needed to take a match
    #[arg(long)]
    pub match_goal: Option<u32>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never clear the screen
    #[arg(long)]
    pub no_clear: bool,
}

impl PlayArgs {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(first) = self.first {
            config = config.with_first_player(first);
        }
        if let Some(goal) = self.match_goal {
            config = config.with_match_goal(goal);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        config
    }
}
