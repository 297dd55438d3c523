use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Difficulty;
use crate::engine::{Engine, GameEvent, GameState};
use crate::food::{Effect, Food};
use crate::grid::Direction;
use crate::input::{difficulty_for_key, InputBuffer};
use crate::interpolation::segment_positions;
use crate::scheduler::TickScheduler;
use crate::walls::WallSet;

/// What one render callback produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub ticked: bool,
    pub events: Vec<GameEvent>,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    /// Eased grid positions, head first.
    pub segments: Vec<(f64, f64)>,
    pub walls: &'a WallSet,
    pub food: Option<Food>,
    pub direction: Direction,
    pub progress: f64,
    pub score: u32,
    pub high_score: u32,
    pub combo: u32,
    pub combo_remaining: Option<f64>,
    /// Active effects with milliseconds left.
    pub effects: Vec<(Effect, f64)>,
    pub difficulty: Difficulty,
    pub state: GameState,
}

/// One game: board, input queue, clock and randomness in a single owner.
pub struct GameSession<R = StdRng> {
    engine: Engine,
    input: InputBuffer,
    scheduler: TickScheduler,
    rng: R,
}

impl GameSession<StdRng> {
    pub fn seeded(seed: u64, high_score: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), high_score, Difficulty::default())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(mut rng: R, high_score: u32, difficulty: Difficulty) -> Self {
        let engine = Engine::new(&mut rng, high_score, difficulty);
        info!("new session: {} walls, difficulty {}", engine.walls().len(), difficulty.label());
        Self::from_engine(engine, rng)
    }

    pub fn from_engine(engine: Engine, rng: R) -> Self {
        Self {
            engine,
            input: InputBuffer::default(),
            scheduler: TickScheduler::default(),
            rng,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn pending_turns(&self) -> usize {
        self.input.len()
    }

    pub fn progress(&self) -> f64 {
        self.scheduler.progress()
    }

    pub fn direction(&self) -> Direction {
        self.engine.direction()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Direction keys; anything else is ignored. Returns whether a turn was
    /// queued.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        if !self.engine.is_running() {
            return false;
        }
        self.input.submit_key(key, self.engine.direction())
    }

    /// Keys that went down within the same frame. A key refused only because
    /// of its position in the batch is offered once more after the rest, so
    /// a two-key corner turn works whichever order the host reports it in.
    /// Returns how many turns were queued.
    pub fn handle_key_batch(&mut self, keys: &[&str]) -> usize {
        let refused: Vec<&str> = keys.iter().copied().filter(|k| !self.handle_key_press(k)).collect();
        let retried = refused.iter().filter(|k| self.handle_key_press(k)).count();
        keys.len() - refused.len() + retried
    }

    /// Keys `1`, `2` and `3` pick easy, normal and hard.
    pub fn handle_difficulty_key(&mut self, key: &str) -> bool {
        match difficulty_for_key(key) {
            Some(difficulty) => {
                self.set_difficulty(difficulty);
                true
            }
            None => false,
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// Called once per displayed frame with a millisecond timestamp.
    pub fn frame(&mut self, now: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.engine.is_running() {
            return report;
        }

        report.events = self.engine.poll(now);

        if self.scheduler.advance(now, self.engine.tick_interval()) {
            let turn = self.input.pop();
            report.events.extend(self.engine.tick(turn, now, &mut self.rng));
            report.ticked = true;
        }
        report
    }

    /// Starts a fresh game on a new wall layout, keeping the high score and
    /// the difficulty.
    pub fn reset(&mut self) {
        self.engine.restart(&mut self.rng);
        self.input.clear();
        self.scheduler.reset();
        info!("session reset, high score {}", self.engine.score().high_score);
    }

    pub fn snapshot(&self, now: f64) -> Snapshot<'_> {
        let e = &self.engine;
        Snapshot {
            segments: segment_positions(e.snake(), e.direction(), self.scheduler.progress()),
            walls: e.walls(),
            food: e.food(),
            direction: e.direction(),
            progress: self.scheduler.progress(),
            score: e.score().score,
            high_score: e.score().high_score,
            combo: e.combo().count(),
            combo_remaining: e.combo().remaining(now),
            effects: e.effects().iter().map(|a| (a.effect, a.remaining(now))).collect(),
            difficulty: e.difficulty(),
            state: e.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> GameSession<StdRng> {
        GameSession::seeded(seed, 0)
    }

    #[test]
    fn keys_ignored_after_game_over() {
        let mut s = session(5);
        s.engine = Engine::from_parts(vec![crate::grid::Cell::new(0, 0)], Direction::Left, WallSet::default(), None, 0, Difficulty::Normal);
        s.frame(0.0);
        s.frame(100.0);
        assert!(!s.is_running());
        assert!(!s.handle_key_press("ArrowUp"));
        assert_eq!(s.frame(200.0), FrameReport::default());
    }

    #[test]
    fn corner_turn_in_one_frame_survives_either_order() {
        for batch in [["ArrowDown", "ArrowLeft"], ["ArrowLeft", "ArrowDown"]] {
            let mut s = session(5);
            assert_eq!(s.direction(), Direction::Right);
            assert_eq!(s.handle_key_batch(&batch), 2);
            assert_eq!(s.pending_turns(), 2);
            s.frame(0.0);
            s.frame(100.0);
            assert_eq!(s.direction(), Direction::Down);
        }
    }

    #[test]
    fn key_batch_still_rejects_reversals() {
        let mut s = session(5);
        assert_eq!(s.handle_key_batch(&["ArrowLeft", "Enter"]), 0);
        assert_eq!(s.pending_turns(), 0);
    }

    #[test]
    fn difficulty_key_changes_interval() {
        let mut s = session(5);
        assert!(s.handle_difficulty_key("3"));
        assert_eq!(s.engine().tick_interval(), 80.0);
        assert_eq!(s.engine().difficulty(), Difficulty::Hard);
        assert!(!s.handle_difficulty_key("9"));
        assert_eq!(s.engine().difficulty(), Difficulty::Hard);
    }

    #[test]
    fn snapshot_mirrors_engine() {
        let s = session(9);
        let snap = s.snapshot(0.0);
        assert_eq!(snap.segments.len(), 1);
        assert_eq!(snap.walls.len(), crate::config::WALL_COUNT);
        assert_eq!(snap.state, GameState::Running);
        assert_eq!(snap.combo_remaining, None);
        assert!(snap.effects.is_empty());
    }
}
