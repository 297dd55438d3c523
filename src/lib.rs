//! Grid snake with procedural walls, typed food, combos and a fixed-step
//! tick driven from the render loop.

pub mod config;
pub mod cosmetics;
pub mod engine;
pub mod food;
pub mod grid;
pub mod input;
pub mod interpolation;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod status;
pub mod storage;
pub mod walls;

pub use config::Difficulty;
pub use engine::{Engine, GameEvent, GameOverReason, GameState};
pub use food::{Effect, Food, FoodKind};
pub use grid::{Cell, Direction, GRID_COUNT};
pub use session::{FrameReport, GameSession, Snapshot};
pub use storage::{JsonFileStore, MemoryStore, ScoreStore};
