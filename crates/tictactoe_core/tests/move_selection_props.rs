//! Property tests for the computer move policy.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use tictactoe_core::rules::{WINNING_LINES, find_at_risk_cell, has_won};
use tictactoe_core::{Board, Marker, Position, Rule, strategy};

/// Plays up to `plies` random legal moves, stopping early on a win.
fn random_board(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut marker = if seed % 2 == 0 {
        Marker::Human
    } else {
        Marker::Computer
    };
    for _ in 0..plies {
        if board.outcome().is_some() {
            break;
        }
        let unused = board.unused_cells();
        let pick = unused[rand::Rng::random_range(&mut rng, 0..unused.len())];
        board.mark(pick, marker).unwrap();
        marker = marker.opponent();
    }
    board
}

fn first_threat(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES
        .iter()
        .find_map(|line| find_at_risk_cell(line, board, marker))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn center_taken_whenever_free(seed in any::<u64>(), plies in 0usize..9) {
        let board = random_board(seed, plies);
        prop_assume!(board.is_empty(Position::Center));
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(strategy::select_move(&board, &mut rng).unwrap(), Position::Center);
    }

    #[test]
    fn chosen_cell_is_always_unused(seed in any::<u64>(), plies in 0usize..9) {
        let board = random_board(seed, plies);
        prop_assume!(!board.is_full());
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let choice = strategy::select_move(&board, &mut rng).unwrap();
        prop_assert!(board.unused_cells().contains(&choice));
    }

    #[test]
    fn cascade_order_is_respected(seed in any::<u64>(), plies in 1usize..9) {
        let board = random_board(seed, plies);
        prop_assume!(!board.is_full() && !board.is_empty(Position::Center));
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = strategy::decide(&board, &mut rng).unwrap();

        match (first_threat(&board, Marker::Computer), first_threat(&board, Marker::Human)) {
            (Some(win), _) => {
                prop_assert_eq!(decision.rule, Rule::Offense);
                prop_assert_eq!(decision.position, win);
            }
            (None, Some(block)) => {
                prop_assert_eq!(decision.rule, Rule::Defense);
                prop_assert_eq!(decision.position, block);
            }
            (None, None) => prop_assert_eq!(decision.rule, Rule::Random),
        }
    }

    #[test]
    fn selection_does_not_mutate_board(seed in any::<u64>(), plies in 0usize..9) {
        let board = random_board(seed, plies);
        prop_assume!(!board.is_full());
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let _ = strategy::select_move(&board, &mut rng).unwrap();
        prop_assert_eq!(board, before);
    }
}

#[test]
fn offensive_cell_wins_the_game() {
    // O O . / X O . / X . X: computer completes the top row
    let board: Board = "OO. XO. X.X".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let decision = strategy::decide(&board, &mut rng).unwrap();
    assert_eq!(decision.rule, Rule::Offense);

    let mut after = board.clone();
    after.mark(decision.position, Marker::Computer).unwrap();
    assert!(has_won(&after, Marker::Computer));
}

#[test]
fn random_fallback_covers_every_unused_cell() {
    let board: Board = "O.. .X. ...".parse().unwrap();
    let unused: BTreeSet<Position> = board.unused_cells().into_iter().collect();

    let chosen: BTreeSet<Position> = (0..500)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            strategy::select_move(&board, &mut rng).unwrap()
        })
        .collect();

    assert_eq!(chosen, unused);
}

#[test]
fn same_seed_same_choice() {
    let board: Board = "O.. .X. ...".parse().unwrap();
    let first = strategy::select_move(&board, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = strategy::select_move(&board, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(first, second);
}
