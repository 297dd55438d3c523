//! Movement and collision: one grid step per tick, food effects, and the
//! Running -> GameOver state machine.

use std::collections::VecDeque;

use log::{debug, info};
use rand::Rng;

use crate::config::{Difficulty, EFFECT_DURATION_MS, MAX_INTERVAL, MIN_INTERVAL, SLOW_DOWN_FACTOR, SPAWN_CELL, SPEED_UP_FACTOR};
use crate::food::{Effect, Food, FoodKind};
use crate::grid::{Cell, Direction};
use crate::scoring::{food_points, Combo, Score};
use crate::status::ActiveEffects;
use crate::walls::WallSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    OutOfBounds,
    SelfCollision,
    Wall,
    /// No free cell was left for the next piece of food.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver(GameOverReason),
}

/// Notifications for the presentation and persistence layers.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    FoodEaten { cell: Cell, kind: FoodKind, points: u32, combo: u32 },
    EffectStarted(Effect),
    EffectExpired(Effect),
    ComboEnded,
    NewHighScore(u32),
    GameOver { reason: GameOverReason, score: u32, high_score: u32 },
}

#[derive(Clone, Debug)]
pub struct Engine {
    snake: VecDeque<Cell>,
    direction: Direction,
    walls: WallSet,
    food: Option<Food>,
    score: Score,
    combo: Combo,
    effects: ActiveEffects,
    difficulty: Difficulty,
    tick_interval: f64,
    state: GameState,
}

impl Engine {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, high_score: u32, difficulty: Difficulty) -> Self {
        let walls = WallSet::generate(rng);
        let snake = VecDeque::from([SPAWN_CELL]);
        let food = Food::spawn(rng, &snake, &walls);
        Self::from_parts(snake, Direction::Right, walls, food, high_score, difficulty)
    }

    /// Builds an engine around a hand-made layout.
    pub fn from_parts(
        snake: impl Into<VecDeque<Cell>>,
        direction: Direction,
        walls: WallSet,
        food: Option<Food>,
        high_score: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            snake: snake.into(),
            direction,
            walls,
            food,
            score: Score::new(high_score),
            combo: Combo::default(),
            effects: ActiveEffects::default(),
            difficulty,
            tick_interval: difficulty.base_interval(),
            state: GameState::Running,
        }
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.walls = WallSet::generate(rng);
        self.snake = VecDeque::from([SPAWN_CELL]);
        self.direction = Direction::Right;
        self.food = Food::spawn(rng, &self.snake, &self.walls);
        self.score.reset();
        self.combo.clear();
        self.effects.clear();
        self.tick_interval = self.difficulty.base_interval();
        self.state = GameState::Running;
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn combo(&self) -> &Combo {
        &self.combo
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.tick_interval = difficulty.base_interval();
        debug!("difficulty set to {}, interval {}ms", difficulty.label(), self.tick_interval);
    }

    /// Advances the snake one cell, turning to `turn` first if given.
    pub fn tick<R: Rng + ?Sized>(&mut self, turn: Option<Direction>, now: f64, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        if let Some(dir) = turn {
            self.direction = dir;
        }
        let head = self.head().step(self.direction);

        // The full pre-move body is checked, tail included.
        let collision = if !head.in_bounds() {
            Some(GameOverReason::OutOfBounds)
        } else if self.snake.contains(&head) {
            Some(GameOverReason::SelfCollision)
        } else if self.walls.is_wall(head) {
            Some(GameOverReason::Wall)
        } else {
            None
        };
        if let Some(reason) = collision {
            self.end(reason, &mut events);
            return events;
        }

        self.snake.push_front(head);

        if let Some(food) = self.food.filter(|f| f.cell == head) {
            self.eat(food, now, rng, &mut events);
        } else {
            self.snake.pop_back();
        }
        events
    }

    fn eat<R: Rng + ?Sized>(&mut self, food: Food, now: f64, rng: &mut R, events: &mut Vec<GameEvent>) {
        // the multiplier must not outlive the combo window, polled or not
        if self.combo.poll(now) {
            events.push(GameEvent::ComboEnded);
        }
        let points = food_points(food.kind, self.difficulty, self.combo.count());
        let new_high = self.score.add(points);

        if let Some(effect) = food.kind.effect() {
            self.apply_effect(effect, now);
            events.push(GameEvent::EffectStarted(effect));
        }

        let combo = self.combo.register(now);
        events.push(GameEvent::FoodEaten { cell: food.cell, kind: food.kind, points, combo });
        if new_high {
            events.push(GameEvent::NewHighScore(self.score.high_score));
        }

        self.food = Food::spawn(rng, &self.snake, &self.walls);
        if self.food.is_none() {
            self.end(GameOverReason::BoardFull, events);
        }
    }

    fn apply_effect(&mut self, effect: Effect, now: f64) {
        self.tick_interval = match effect {
            Effect::SpeedUp => (self.tick_interval * SPEED_UP_FACTOR).max(MIN_INTERVAL),
            Effect::SlowDown => (self.tick_interval * SLOW_DOWN_FACTOR).min(MAX_INTERVAL),
        };
        self.effects.start(effect, now, EFFECT_DURATION_MS);
        debug!("{effect:?} applied, interval {}ms", self.tick_interval);
    }

    /// Checks the wall-clock timers: combo lapse and effect expiry.
    pub fn poll(&mut self, now: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }
        if self.combo.poll(now) {
            events.push(GameEvent::ComboEnded);
        }
        let expired = self.effects.expire(now);
        for e in &expired {
            events.push(GameEvent::EffectExpired(e.effect));
        }
        if !expired.is_empty() && self.effects.is_empty() {
            self.tick_interval = self.difficulty.base_interval();
            debug!("effects over, interval back to {}ms", self.tick_interval);
        }
        events
    }

    fn end(&mut self, reason: GameOverReason, events: &mut Vec<GameEvent>) {
        self.state = GameState::GameOver(reason);
        info!("game over ({reason:?}) with score {}, length {}", self.score.score, self.snake.len());
        events.push(GameEvent::GameOver { reason, score: self.score.score, high_score: self.score.high_score });
    }
}
