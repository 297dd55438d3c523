use std::collections::VecDeque;

use crate::config::Difficulty;
use crate::grid::{is_valid_turn, Direction};

/// Maps a key name (arrow keys or WASD, any case) to a heading.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key.to_ascii_lowercase().as_str() {
        "arrowup" | "w" => Some(Direction::Up),
        "arrowdown" | "s" => Some(Direction::Down),
        "arrowleft" | "a" => Some(Direction::Left),
        "arrowright" | "d" => Some(Direction::Right),
        _ => None,
    }
}

pub fn difficulty_for_key(key: &str) -> Option<Difficulty> {
    match key {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Normal),
        "3" => Some(Difficulty::Hard),
        _ => None,
    }
}

/// Pending turns, at most `CAPACITY` deep, drained one per tick.
#[derive(Clone, Debug, Default)]
pub struct InputBuffer {
    queue: VecDeque<Direction>,
}

impl InputBuffer {
    pub const CAPACITY: usize = 2;

    /// Queues `dir` if there is room and it is a valid turn from the last
    /// queued heading, or from `current` when nothing is queued.
    /// Returns whether the turn was queued.
    pub fn push(&mut self, dir: Direction, current: Direction) -> bool {
        if self.queue.len() >= Self::CAPACITY {
            return false;
        }
        let last = self.queue.back().copied().unwrap_or(current);
        if !is_valid_turn(last, dir) {
            return false;
        }
        self.queue.push_back(dir);
        true
    }

    pub fn submit_key(&mut self, key: &str, current: Direction) -> bool {
        match direction_for_key(key) {
            Some(dir) => self.push(dir, current),
            None => false,
        }
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
