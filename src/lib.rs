//! Terminal tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Core** (`tictactoe_core`): board, win detection, move selection
//! - **Console**: line-based prompts over any reader/writer
//! - **Players**: human input and the computer policy behind one trait
//! - **Session**: rounds, match scoring and replay prompts
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{Console, FirstPlayer, GameConfig, GameSession};
//!
//! let config = GameConfig::default()
//!     .with_first_player(FirstPlayer::Human)
//!     .with_match_goal(1)
//!     .with_seed(Some(3))
//!     .with_clear_screen(false);
//! let input = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(3) + "n\nn\n";
//! let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
//!
//! let scores = GameSession::from_config(config).play(&mut console)?;
//! assert_eq!(scores.rounds(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod players;
mod session;

// Crate-level exports - Entry points
pub use app::{Suggestion, load_config, run_play, run_suggest, suggest};

// Crate-level exports - Command line
pub use cli::{Cli, Command, PlayArgs};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, FirstPlayer, GameConfig};

// Crate-level exports - Terminal I/O
pub use console::{Console, Terminal, join_or};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, Player};

// Crate-level exports - Session management
pub use session::{GameSession, Scoreboard};

// Crate-level exports - Game types
pub use tictactoe_core::{Board, Marker, Outcome, Position, Square};
