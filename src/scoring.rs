use crate::config::{Difficulty, COMBO_WINDOW_MS};
use crate::food::FoodKind;

/// Points for one piece of food: base points scaled by difficulty and by the
/// combo multiplier (`combo * 0.5` once the combo exceeds one), floored.
pub fn food_points(kind: FoodKind, difficulty: Difficulty, combo: u32) -> u32 {
    let combo_multiplier = if combo <= 1 { 1.0 } else { combo as f64 * 0.5 };
    (kind.points() as f64 * difficulty.food_points() * combo_multiplier).floor() as u32
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Score {
    pub score: u32,
    pub high_score: u32,
}

impl Score {
    pub fn new(high_score: u32) -> Self {
        Self { score: 0, high_score }
    }

    /// Adds `points`; returns true if this raised the high score.
    pub fn add(&mut self, points: u32) -> bool {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Consecutive meals eaten within `COMBO_WINDOW_MS` of each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Combo {
    count: u32,
    last_meal: Option<f64>,
}

impl Combo {
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Records a meal at `now` and returns the updated count.
    pub fn register(&mut self, now: f64) -> u32 {
        self.count = match self.last_meal {
            Some(last) if now - last < COMBO_WINDOW_MS => self.count + 1,
            _ => 1,
        };
        self.last_meal = Some(now);
        self.count
    }

    /// Drops the combo to zero once the window has passed without a meal.
    /// Returns true on the call that ended it.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.last_meal {
            Some(last) if self.count > 0 && now - last >= COMBO_WINDOW_MS => {
                self.count = 0;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds left before the combo lapses, if one is running.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        match self.last_meal {
            Some(last) if self.count > 0 => Some((COMBO_WINDOW_MS - (now - last)).max(0.0)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Combo::default();
    }
}
