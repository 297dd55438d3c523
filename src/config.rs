use crate::grid::{Cell, GRID_COUNT};

// Game constants
pub const BASE_SPEED: f64 = 100.0; // tick interval at normal difficulty (ms)
pub const WALL_COUNT: usize = (GRID_COUNT * GRID_COUNT) as usize * 5 / 100; // 5% of the board
pub const SEED_WALL_RATIO: f64 = 0.3;
pub const SPAWN_CELL: Cell = Cell::new(10, 10);
pub const CLEAR_ZONE_MIN: i32 = 8;
pub const CLEAR_ZONE_MAX: i32 = 12;

pub const COMBO_WINDOW_MS: f64 = 2000.0;
pub const EFFECT_DURATION_MS: f64 = 5000.0;

pub const SPEED_UP_FACTOR: f64 = 0.8;
pub const SLOW_DOWN_FACTOR: f64 = 1.2;
pub const MIN_INTERVAL: f64 = BASE_SPEED * 0.7;
pub const MAX_INTERVAL: f64 = BASE_SPEED * 1.3;

/// Random draws the food spawner makes before scanning for free cells.
pub const FOOD_SPAWN_ATTEMPTS: usize = 4096;

/// Cells kept free of walls around the spawn point.
pub fn in_clear_zone(c: Cell) -> bool {
    (CLEAR_ZONE_MIN..=CLEAR_ZONE_MAX).contains(&c.x) && (CLEAR_ZONE_MIN..=CLEAR_ZONE_MAX).contains(&c.y)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn speed_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.2,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.8,
        }
    }

    pub fn food_points(self) -> f64 {
        match self {
            Difficulty::Easy | Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    pub fn base_interval(self) -> f64 {
        BASE_SPEED * self.speed_multiplier()
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}
