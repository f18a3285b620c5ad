//! Integration tests for the session controller

use crossterm::event::{KeyCode, KeyEvent};
use grow_2048::core::{
    Grid, MoveOutcome, ScriptedSource, SeededRng, Session, Stage, StageTable, DEFAULT_STAGES,
};
use grow_2048::input::handle_key_event;
use grow_2048::types::{Direction, GameAction};

fn grid(rows: [[u32; 4]; 4]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_game_lifecycle() {
    let mut session = Session::new(SeededRng::new(12345));
    assert!(!session.is_game_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.grid().count_filled(), 2);

    // Play until stuck (a cyclic policy always ends a game).
    let mut turns = 0;
    while !session.is_game_over() && turns < 10_000 {
        session.apply_move(Direction::ALL[turns % 4]);
        turns += 1;
    }
    assert!(session.is_game_over(), "game did not end in {} turns", turns);
    assert!(!session.grid().has_available_move());
    assert!(session.score() > 0);

    session.restart();
    assert!(!session.is_game_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.episode_id(), 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Session::new(SeededRng::new(99));
    let mut b = Session::new(SeededRng::new(99));
    assert_eq!(a.grid(), b.grid());

    for i in 0..200 {
        let dir = Direction::ALL[(i * 7 + i / 3) % 4];
        assert_eq!(a.apply_move(dir), b.apply_move(dir));
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_keys_drive_the_session() {
    let mut session = Session::with_grid(
        grid([[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0]]),
        ScriptedSource::zeros(),
    );

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('k'))).unwrap();
    assert_eq!(action, GameAction::Move(Direction::Up));
    assert!(session.apply_action(action));

    assert_eq!(session.grid().get(0, 0), Some(4));
    assert_eq!(session.score(), 4);

    let restart = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    assert!(session.apply_action(restart));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_unchanged_move_keeps_score_and_skips_spawn() {
    let packed = grid([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    let mut session = Session::with_grid(packed, ScriptedSource::zeros());

    assert!(!session.apply_action(GameAction::Move(Direction::Left)));
    assert!(!session.apply_action(GameAction::Move(Direction::Up)));
    assert_eq!(session.grid(), &packed);
    assert_eq!(session.score(), 0);
    assert_eq!(session.source().calls(), 0);

    // Down does move, and spawns exactly once (cell pick + weight pick).
    assert!(session.apply_move(Direction::Down).changed());
    assert_eq!(session.source().calls(), 2);
}

#[test]
fn test_game_over_is_one_way_until_restart() {
    let mut session = Session::with_grid(
        grid([
            [2, 2, 8, 16],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
            [32, 64, 128, 256],
        ]),
        ScriptedSource::zeros(),
    );

    let outcome = session.apply_move(Direction::Left);
    assert!(matches!(outcome, MoveOutcome::Moved { game_over: true, .. }));

    for dir in Direction::ALL {
        assert_eq!(session.apply_move(dir), MoveOutcome::Ignored);
        assert!(session.is_game_over());
    }

    session.apply_action(GameAction::Restart);
    assert!(!session.is_game_over());
}

#[test]
fn test_stage_follows_score() {
    // Two 1024s merge into 2048 points: straight into the City stage.
    let mut session = Session::with_grid(
        grid([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]),
        ScriptedSource::zeros(),
    );
    assert_eq!(session.stage().zone, "Ground");

    session.apply_move(Direction::Right);
    assert_eq!(session.score(), 2048);
    assert_eq!(session.stage().zone, "City");

    let snap = session.snapshot();
    assert!(snap.scenery.clouds);
    assert!(!snap.scenery.stars);
    assert_eq!(snap.next_stage_at, Some(5000));
}

static TWO_STAGES: [Stage; 2] = [
    Stage {
        threshold: 0,
        zone: "Low",
        ..DEFAULT_STAGES[0]
    },
    Stage {
        threshold: 8,
        zone: "High",
        ..DEFAULT_STAGES[5]
    },
];

#[test]
fn test_custom_stage_table() {
    let table = StageTable::new(&TWO_STAGES).unwrap();
    let mut session = Session::with_grid(
        grid([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]),
        ScriptedSource::zeros(),
    )
    .with_stages(table);

    assert_eq!(session.stage().zone, "Low");
    session.apply_move(Direction::Left);
    assert_eq!(session.score(), 8);
    assert_eq!(session.stage().zone, "High");
    assert_eq!(session.snapshot().next_stage_at, None);
}
