//! Tic Tac Toe - terminal CLI

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Command, Console, load_config, run_play, run_suggest};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => {
            let config = load_config(&args)?;
            let mut console = Console::stdio().with_clear_screen(*config.clear_screen());
            let scores = run_play(config, &mut console)?;
            info!(
                human = *scores.human(),
                computer = *scores.computer(),
                ties = *scores.ties(),
                "Session ended"
            );
            Ok(())
        }
        Command::Suggest { board, seed, json } => {
            run_suggest(&board, seed, json, &mut std::io::stdout())
        }
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
