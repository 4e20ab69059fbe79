//! Tests for move history and time travel.

use strictly_timetravel::{
    Board, GameStatus, HistoryError, Move, MoveError, Player, Position, Square, TimeTravelGame,
    calculate_winner,
};

fn played(indices: &[usize]) -> TimeTravelGame {
    let mut game = TimeTravelGame::new();
    for &idx in indices {
        game.apply_move(idx);
    }
    game
}

#[test]
fn test_initial_board_has_no_winner() {
    let game = TimeTravelGame::new();
    assert!(game.current_board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(calculate_winner(game.current_board()), None);
}

#[test]
fn test_n_moves_without_jumps() {
    let sequence = [4, 0, 8, 2, 6, 1];
    for n in 0..=sequence.len() {
        let game = played(&sequence[..n]);
        assert_eq!(game.history_len(), n + 1);
        assert_eq!(game.current_move(), n);
    }
}

#[test]
fn test_turn_follows_move_parity() {
    let mut game = TimeTravelGame::new();
    let expected = [Player::X, Player::O, Player::X, Player::O];
    for (idx, player) in [0, 1, 2, 3].into_iter().zip(expected) {
        assert_eq!(game.turn(), player);
        game.apply_move(idx);
        assert_eq!(game.move_at(game.current_move()), Some(Move::new(player, Position::ALL[idx])));
    }
}

#[test]
fn test_occupied_square_leaves_state_unchanged() {
    let mut game = played(&[4, 0]);
    let before = game.clone();
    for idx in [4, 0] {
        game.apply_move(idx);
        assert_eq!(game, before);
    }
}

#[test]
fn test_x_wins_on_anti_diagonal() {
    // X: center, top-right, bottom-left. O: top-left, top-center.
    let game = played(&[4, 0, 2, 1, 6]);
    assert_eq!(calculate_winner(game.current_board()), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_no_moves_after_win() {
    let mut game = played(&[4, 0, 2, 1, 6]);
    let before = game.clone();
    for idx in 0..9 {
        game.apply_move(idx);
        assert_eq!(game, before);
    }
    assert_eq!(game.try_apply_move(8), Err(MoveError::GameOver));
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut game = played(&[4, 0, 2, 1, 6]);
    assert_eq!(game.history_len(), 6);

    game.jump_to(2).unwrap();
    assert_eq!(game.history_len(), 6);
    game.apply_move(8);

    assert_eq!(game.history_len(), 2 + 2);
    assert_eq!(game.current_move(), 3);
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert!(game.current_board().is_empty(Position::TopRight));
}

#[test]
fn test_jump_back_out_of_won_position_allows_play() {
    let mut game = played(&[4, 0, 2, 1, 6]);
    game.jump_to(4).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });

    game.apply_move(7);
    assert_eq!(game.history_len(), 6);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_past_snapshots_survive_jumps() {
    let mut game = played(&[4, 0, 8]);
    let snapshots: Vec<Board> = game.history().iter().copied().collect();

    game.jump_to(0).unwrap();
    game.jump_to(3).unwrap();
    game.jump_to(1).unwrap();

    let after: Vec<Board> = game.history().iter().copied().collect();
    assert_eq!(snapshots, after);
}

#[test]
fn test_jump_to_start_then_play() {
    let mut game = played(&[4, 0, 8]);
    game.jump_to(0).unwrap();
    game.apply_move(0);

    assert_eq!(game.history_len(), 2);
    assert_eq!(game.move_at(1), Some(Move::new(Player::X, Position::TopLeft)));
}

#[test]
fn test_jump_past_end_rejected() {
    let mut game = played(&[4]);
    let before = game.clone();
    assert_eq!(
        game.jump_to(5),
        Err(HistoryError::OutOfRange { requested: 5, len: 2 })
    );
    assert_eq!(game, before);
}

#[test]
fn test_history_serializes_as_board_list() {
    let game = played(&[4, 0]);
    let json = serde_json::to_value(game.history()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(3));

    let restored: strictly_timetravel::History = serde_json::from_value(json).unwrap();
    assert_eq!(&restored, game.history());
}

#[test]
fn test_history_json_must_start_empty() {
    let board = Board::new().with_mark(Position::Center, Player::X);
    let json = serde_json::to_string(&vec![board]).unwrap();
    assert!(serde_json::from_str::<strictly_timetravel::History>(&json).is_err());
}
