//! Integration tests for the game session and its event log

use std::sync::mpsc;

use match3::config::GameConfig;
use match3::event_log::{write_record, EventLog};
use match3::game::{deal, Game};
use match3::types::{BoardEvent, CursorAction, Gem, MoveOutcome, Position};

fn config() -> GameConfig {
    GameConfig {
        width: 6,
        height: 6,
        seed: 11,
        kinds: 4,
        ..GameConfig::default()
    }
}

/// Cursor actions that walk from the top-left to `pos`.
fn walk_to(pos: Position) -> Vec<CursorAction> {
    let mut actions = vec![CursorAction::Down; pos.row];
    actions.extend(vec![CursorAction::Right; pos.col]);
    actions
}

/// Find a legal neighbour swap on the dealt board.
fn legal_swap(game: &mut Game) -> (Position, Position) {
    let board = game.board_mut();
    let cells: Vec<Position> = board.positions().collect();
    for pos in cells {
        let right = Position::new(pos.row, pos.col + 1);
        if board.is_legal_move(pos, right) {
            return (pos, right);
        }
        let down = Position::new(pos.row + 1, pos.col);
        if board.is_legal_move(pos, down) {
            return (pos, down);
        }
    }
    panic!("no legal move on the dealt board");
}

#[test]
fn test_game_lifecycle_move_via_cursor() {
    let (tx, rx) = mpsc::channel();
    let mut game = Game::new(config(), Some(tx)).unwrap();
    // Opening settle happens before the listener is attached.
    assert!(rx.try_recv().is_err());

    let (first, second) = legal_swap(&mut game);
    for action in walk_to(first) {
        game.apply(action).unwrap();
    }
    assert_eq!(game.apply(CursorAction::Select).unwrap(), None);
    assert_eq!(game.hud().selected, Some(first));

    let step = if second.col > first.col {
        CursorAction::Right
    } else {
        CursorAction::Down
    };
    game.apply(step).unwrap();
    let outcome = game.apply(CursorAction::Select).unwrap();

    let Some(MoveOutcome::Resolved(report)) = outcome else {
        panic!("expected resolved move, got {:?}", outcome);
    };
    assert!(report.runs >= 1);
    assert_eq!(game.hud().moves, 1);
    assert_eq!(game.hud().runs, report.runs);
    assert_eq!(game.hud().selected, None);

    let events: Vec<BoardEvent<Gem>> = rx.try_iter().collect();
    assert_eq!(events.len(), 2 * report.runs as usize);
    assert!(events[0].as_match().is_some());
    assert_eq!(events[1], BoardEvent::Refill);
}

#[test]
fn test_cancel_clears_selection() {
    let mut game = Game::new(config(), None).unwrap();
    game.apply(CursorAction::Select).unwrap();
    assert!(game.hud().selected.is_some());
    game.apply(CursorAction::Cancel).unwrap();
    assert!(game.hud().selected.is_none());
    assert_eq!(game.hud().last, None);
}

#[test]
fn test_new_board_uses_next_seed() {
    let mut game = Game::new(config(), None).unwrap();
    game.apply(CursorAction::NewBoard).unwrap();

    let expected = deal(&config(), config().seed + 1).unwrap();
    for pos in expected.positions() {
        assert_eq!(game.board().piece(pos), expected.piece(pos));
    }
}

#[test]
fn test_event_log_writes_json_lines() {
    let dir = std::env::temp_dir().join(format!("match3-events-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("events.jsonl");
    let _ = std::fs::remove_file(&path);

    let log = EventLog::create(&path).unwrap();
    let mut game = Game::new(config(), Some(log.sender())).unwrap();
    let (first, second) = legal_swap(&mut game);
    let outcome = game.board_mut().move_tiles(first, second);
    drop(game);
    let written = log.finish().unwrap();

    let MoveOutcome::Resolved(report) = outcome else {
        panic!("expected resolved move");
    };
    assert_eq!(written, 2 * report.runs as u64);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len() as u64, written);
    for (seq, line) in lines.iter().enumerate() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["seq"], seq as u64);
        let kind = if seq % 2 == 0 { "match" } else { "refill" };
        assert_eq!(value["kind"], kind);
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_write_record_matches_event_kind() {
    let mut out = Vec::new();
    write_record(&mut out, 3, &BoardEvent::Refill).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "refill");
    assert_eq!(value["seq"], 3);
}
