//! Tests for the board: turn derivation and board text.

mod common;

use common::{board, reachable_boards};
use tictactoe_core::{Board, BoardError, Coord, Mark, Player};

#[test]
fn test_counts_stay_in_step_for_reachable_boards() {
    for b in reachable_boards() {
        let x = b.count(Player::X);
        let o = b.count(Player::O);
        assert!(x == o || x == o + 1, "counts out of step on {}", b.serialize());
        let expected = if x == o { Player::X } else { Player::O };
        assert_eq!(b.turn(), expected);
    }
}

#[test]
fn test_turn_alternates_during_play() {
    let mut b = Board::new();
    let mut expected = Player::X;
    for coord in Coord::ALL {
        assert_eq!(b.turn(), expected);
        b.place(coord, b.turn()).unwrap();
        expected = expected.opponent();
    }
    assert!(b.is_full());
}

#[test]
fn test_round_trip_for_reachable_boards() {
    for b in reachable_boards() {
        let text = b.serialize();
        assert_eq!(text.len(), 9);
        let (decoded, error) = Board::deserialize(&text);
        assert_eq!(error, None);
        assert_eq!(decoded, b);
    }
}

#[test]
fn test_text_round_trip() {
    for text in ["_________", "XOX_O_X__", "XXOOOXXOX"] {
        assert_eq!(board(text).serialize(), text);
    }
}

#[test]
fn test_round_trip_for_every_symbol_sequence() {
    // All 3^9 texts, including counts no game can reach.
    let symbols = ['X', 'O', '_'];
    for mut n in 0..3usize.pow(9) {
        let text: String = (0..9)
            .map(|_| {
                let symbol = symbols[n % 3];
                n /= 3;
                symbol
            })
            .collect();

        let (decoded, error) = Board::deserialize(&text);
        assert_eq!(error, None, "rejected {text}");
        assert_eq!(decoded.serialize(), text);
        assert_eq!(Board::deserialize(&decoded.serialize()).0, decoded);

        let (lowered, _) = Board::deserialize(&text.to_lowercase());
        assert_eq!(lowered, decoded);
    }
}

#[test]
fn test_lowercase_input_uppercase_output() {
    let b = board("xo_______");
    assert_eq!(b.serialize(), "XO_______");
    assert_eq!(b.cell(1, 3), Ok(Mark::Occupied(Player::X)));
    assert_eq!(b.cell(2, 3), Ok(Mark::Occupied(Player::O)));
}

#[test]
fn test_malformed_text_gives_empty_board() {
    for text in ["", "XO", "XO_______X", "XO_____A_", "XO__ ____", "123456789"] {
        let (b, error) = Board::deserialize(text);
        assert_eq!(b, Board::new(), "partial board from {text:?}");
        assert!(matches!(error, Some(BoardError::MalformedSerialization(_))));
    }
}

#[test]
fn test_strict_parse_reports_error() {
    let result: Result<Board, _> = "XX".parse();
    assert!(matches!(result, Err(BoardError::MalformedSerialization(_))));
}

#[test]
fn test_rejected_placements_leave_board_unchanged() {
    let mut b = board("X___O____");
    let before = b;
    assert!(matches!(
        b.place_at(1, 3, Player::X),
        Err(BoardError::CellOccupied(_))
    ));
    assert!(matches!(
        b.place_at(0, 3, Player::X),
        Err(BoardError::OutOfRange { .. })
    ));
    assert_eq!(b, before);
}
