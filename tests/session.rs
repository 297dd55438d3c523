use rand::rngs::StdRng;
use rand::SeedableRng;

use snake_arcade::config::{BASE_SPEED, WALL_COUNT};
use snake_arcade::storage::MemoryStore;
use snake_arcade::walls::WallSet;
use snake_arcade::{
    Cell, Difficulty, Direction, Engine, Food, FoodKind, GameEvent, GameSession, GameState, ScoreStore,
};

fn scripted(snake: Vec<Cell>, dir: Direction, food: Option<Food>) -> GameSession<StdRng> {
    let engine = Engine::from_parts(snake, dir, WallSet::default(), food, 0, Difficulty::Normal);
    GameSession::from_engine(engine, StdRng::seed_from_u64(99))
}

#[test]
fn ticks_follow_the_clock() {
    let mut s = GameSession::seeded(1, 0);
    assert!(!s.frame(0.0).ticked);
    assert!(!s.frame(60.0).ticked);
    assert!(s.progress() > 0.5);
    assert!(s.frame(100.0).ticked);
    assert_eq!(s.engine().head(), Cell::new(11, 10));
    assert_eq!(s.progress(), 0.0);
}

#[test]
fn one_queued_turn_per_tick() {
    let mut s = scripted(vec![Cell::new(10, 10)], Direction::Right, None);
    assert!(s.handle_key_press("ArrowUp"));
    assert!(s.handle_key_press("a"));
    assert!(!s.handle_key_press("s"));
    assert_eq!(s.pending_turns(), 2);

    s.frame(0.0);
    s.frame(100.0);
    assert_eq!(s.engine().head(), Cell::new(10, 9));
    s.frame(200.0);
    assert_eq!(s.engine().head(), Cell::new(9, 9));
    assert_eq!(s.direction(), Direction::Left);
    assert_eq!(s.pending_turns(), 0);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut s = GameSession::seeded(2, 0);
    assert!(!s.handle_key_press("Enter"));
    assert!(!s.handle_key_press("ArrowLeft"));
    assert_eq!(s.pending_turns(), 0);
}

#[test]
fn eating_reports_score_and_high_score() {
    let food = Food { cell: Cell::new(11, 10), kind: FoodKind::Bonus };
    let mut s = scripted(vec![Cell::new(10, 10)], Direction::Right, Some(food));
    let mut store = MemoryStore::default();

    s.frame(0.0);
    let report = s.frame(100.0);
    for event in &report.events {
        if let GameEvent::NewHighScore(score) = event {
            store.save(*score).unwrap();
        }
    }
    assert_eq!(s.engine().score().score, 30);
    assert_eq!(s.engine().snake().len(), 2);
    assert_eq!(store.load().unwrap(), 30);
}

#[test]
fn running_into_the_edge_ends_the_session() {
    let mut s = scripted(vec![Cell::new(28, 3)], Direction::Right, None);
    s.frame(0.0);
    s.frame(100.0);
    let report = s.frame(200.0);
    assert!(matches!(report.events.last(), Some(GameEvent::GameOver { .. })));
    assert!(!s.is_running());
    assert_eq!(s.engine().head(), Cell::new(29, 3));
    assert!(!s.frame(10_000.0).ticked);
}

#[test]
fn speed_food_shortens_the_next_interval() {
    let food = Food { cell: Cell::new(11, 10), kind: FoodKind::Speed };
    let mut s = scripted(vec![Cell::new(10, 10)], Direction::Right, Some(food));
    s.frame(0.0);
    s.frame(100.0);
    assert_eq!(s.engine().tick_interval(), BASE_SPEED * 0.8);
    assert!(!s.frame(179.0).ticked);
    assert!(s.frame(180.0).ticked);
}

#[test]
fn combo_lapse_is_polled_each_frame() {
    let food = Food { cell: Cell::new(11, 10), kind: FoodKind::Normal };
    let mut s = scripted(vec![Cell::new(10, 10)], Direction::Right, Some(food));
    s.frame(0.0);
    s.frame(100.0);
    assert_eq!(s.engine().combo().count(), 1);
    let report = s.frame(2_100.0);
    assert!(report.events.contains(&GameEvent::ComboEnded));
}

#[test]
fn reset_starts_clean_and_keeps_high_score() {
    let food = Food { cell: Cell::new(11, 10), kind: FoodKind::Slow };
    let mut s = scripted(vec![Cell::new(10, 10)], Direction::Right, Some(food));
    s.handle_difficulty_key("1");
    s.frame(0.0);
    s.frame(120.0);
    assert_eq!(s.engine().score().score, 15);

    s.reset();
    assert!(s.is_running());
    assert_eq!(s.engine().score().score, 0);
    assert_eq!(s.engine().score().high_score, 15);
    assert_eq!(s.engine().combo().count(), 0);
    assert!(s.engine().effects().is_empty());
    assert_eq!(s.engine().walls().len(), WALL_COUNT);
    assert_eq!(s.engine().snake().len(), 1);
    assert_eq!(s.engine().tick_interval(), Difficulty::Easy.base_interval());

    // the old session's combo window must not leak into the new one
    let report = s.frame(3_000.0);
    assert!(!report.events.contains(&GameEvent::ComboEnded));
}

#[test]
fn generated_sessions_keep_food_clear() {
    for seed in 0..32 {
        let s = GameSession::seeded(seed, 0);
        let snap = s.snapshot(0.0);
        let food = snap.food.expect("fresh board has room");
        assert!(!snap.walls.is_wall(food.cell));
        assert_ne!(food.cell, Cell::new(10, 10));
        assert_eq!(snap.state, GameState::Running);
    }
}
