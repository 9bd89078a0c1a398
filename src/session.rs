//! Match and session loop.
//!
//! A session is a series of matches. A match is a series of rounds that
//! ends when one side reaches the configured number of round wins.

use crate::config::{FirstPlayer, GameConfig};
use crate::console::Terminal;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::Result;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_core::rules::has_won;
use tictactoe_core::{Board, Marker, Outcome};
use tracing::{debug, info, instrument};

/// Round results within one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Rounds won by the human.
    human: u32,
    /// Rounds won by the computer.
    computer: u32,
    /// Rounds that ended in a draw.
    ties: u32,
}

impl Scoreboard {
    /// Records a finished round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Marker::Human) => self.human += 1,
            Outcome::Winner(Marker::Computer) => self.computer += 1,
            Outcome::Draw => self.ties += 1,
        }
    }

    /// Rounds played so far.
    pub fn rounds(&self) -> u32 {
        self.human + self.computer + self.ties
    }

    /// Side that has reached `goal` round wins, if any.
    pub fn champion(&self, goal: u32) -> Option<Marker> {
        if self.human >= goal {
            Some(Marker::Human)
        } else if self.computer >= goal {
            Some(Marker::Computer)
        } else {
            None
        }
    }
}

/// Human versus computer play session.
pub struct GameSession<R> {
    config: GameConfig,
    human: HumanPlayer,
    computer: ComputerPlayer<R>,
    coin: R,
}

impl GameSession<StdRng> {
    /// Builds a session from config, seeding all randomness from
    /// `config.seed` when present.
    #[instrument(skip_all, fields(seed = ?config.seed()))]
    pub fn from_config(config: GameConfig) -> Self {
        let mut seeder = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let coin = StdRng::from_rng(&mut seeder);
        Self::new(config, ComputerPlayer::new("Computer", seeder), coin)
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session with an explicit computer player and coin for
    /// first-player draws.
    pub fn new(config: GameConfig, computer: ComputerPlayer<R>, coin: R) -> Self {
        Self {
            config,
            human: HumanPlayer::new("You"),
            computer,
            coin,
        }
    }

    /// Plays matches until the user stops, returning the last match's scores.
    #[instrument(skip_all, fields(match_goal = *self.config.match_goal()))]
    pub fn play(&mut self, terminal: &mut dyn Terminal) -> Result<Scoreboard> {
        let goal = *self.config.match_goal();
        terminal.clear()?;
        terminal.say("Welcome to Tic Tac Toe!")?;
        terminal.say(&format!(
            "The first player to win {} round{} wins the match.",
            goal,
            if goal == 1 { "" } else { "s" }
        ))?;

        let mut scoreboard = Scoreboard::default();
        'session: loop {
            let champion = loop {
                let first = self.first_player(terminal)?;
                let outcome = self.play_round(first, terminal)?;
                scoreboard.record(outcome);
                self.announce(outcome, &scoreboard, terminal)?;

                if let Some(champion) = scoreboard.champion(goal) {
                    break champion;
                }
                if !terminal.ask_yes_no("Play again? (y or n)")? {
                    break 'session;
                }
            };

            info!(?champion, human = scoreboard.human, computer = scoreboard.computer, "Match finished");
            match champion {
                Marker::Human => terminal.say("Congrats, you have won the match!")?,
                Marker::Computer => terminal.say("Sorry, the computer has won the match.")?,
            }

            if !terminal.ask_yes_no("Play another match? (y or n)")? {
                break;
            }
            scoreboard = Scoreboard::default();
        }

        terminal.say("Thanks for playing Tic Tac Toe!")?;
        Ok(scoreboard)
    }

    /// Plays one round on a fresh board.
    #[instrument(skip(self, terminal))]
    pub fn play_round(&mut self, first: Marker, terminal: &mut dyn Terminal) -> Result<Outcome> {
        let mut board = Board::new();
        let mut turn = first;

        let outcome = loop {
            self.show_board(&board, terminal)?;
            let player = self.player_mut(turn);
            let position = player.choose_move(&board, terminal)?;
            board.mark(position, player.marker())?;

            if has_won(&board, turn) {
                break Outcome::Winner(turn);
            }
            if board.is_full() {
                break Outcome::Draw;
            }
            turn = turn.opponent();
        };

        self.show_board(&board, terminal)?;
        debug!(?outcome, "Round finished");
        Ok(outcome)
    }

    fn player_mut(&mut self, marker: Marker) -> &mut dyn Player {
        match marker {
            Marker::Human => &mut self.human,
            Marker::Computer => &mut self.computer,
        }
    }

    /// Resolves who starts the next round.
    #[instrument(skip_all, fields(policy = %self.config.first_player()))]
    fn first_player(&mut self, terminal: &mut dyn Terminal) -> Result<Marker> {
        let policy = *self.config.first_player();
        let first = match policy {
            FirstPlayer::Human => Marker::Human,
            FirstPlayer::Computer => Marker::Computer,
            FirstPlayer::Random => self.flip(terminal)?,
            FirstPlayer::Ask => loop {
                let answer = terminal
                    .ask("Who would like to go first? (player/computer/choose)")?
                    .to_lowercase();
                match answer.as_str() {
                    "player" => break Marker::Human,
                    "computer" => break Marker::Computer,
                    "choose" => break self.flip(terminal)?,
                    _ => terminal.say("Sorry, please pick one of the 3 options.")?,
                }
            },
        };
        debug!(?first, "First player chosen");
        Ok(first)
    }

    fn flip(&mut self, terminal: &mut dyn Terminal) -> Result<Marker> {
        let first = if self.coin.random_bool(0.5) {
            Marker::Human
        } else {
            Marker::Computer
        };
        let name = self.player_mut(first).name().to_string();
        terminal.say(&format!("{} will go first.", name))?;
        Ok(first)
    }

    fn show_board(&self, board: &Board, terminal: &mut dyn Terminal) -> Result<()> {
        terminal.clear()?;
        terminal.say(&format!(
            "You are {}. Computer is {}.",
            Marker::Human,
            Marker::Computer
        ))?;
        terminal.show(&board.display())?;
        Ok(())
    }

    fn announce(
        &self,
        outcome: Outcome,
        scoreboard: &Scoreboard,
        terminal: &mut dyn Terminal,
    ) -> Result<()> {
        terminal.say(match outcome {
            Outcome::Winner(Marker::Human) => "You won!",
            Outcome::Winner(Marker::Computer) => "Computer won!",
            Outcome::Draw => "It's a tie!",
        })?;
        terminal.say(&format!(
            "Score: You {} - Computer {} (ties: {})",
            scoreboard.human, scoreboard.computer, scoreboard.ties
        ))?;
        Ok(())
    }
}
