use rand::Rng;

use crate::config::FOOD_SPAWN_ATTEMPTS;
use crate::grid::{Cell, GRID_COUNT};
use crate::walls::WallSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Normal,
    Speed,
    Slow,
    Bonus,
}

/// What eating a piece of food does to the tick interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    SpeedUp,
    SlowDown,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [FoodKind::Normal, FoodKind::Speed, FoodKind::Slow, FoodKind::Bonus];

    pub fn points(self) -> u32 {
        match self {
            FoodKind::Normal => 10,
            FoodKind::Speed => 20,
            FoodKind::Slow => 15,
            FoodKind::Bonus => 30,
        }
    }

    pub fn effect(self) -> Option<Effect> {
        match self {
            FoodKind::Speed => Some(Effect::SpeedUp),
            FoodKind::Slow => Some(Effect::SlowDown),
            FoodKind::Normal | FoodKind::Bonus => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

impl Food {
    /// Picks a random kind and a random cell clear of the snake and the walls.
    ///
    /// Draws at random first; after `FOOD_SPAWN_ATTEMPTS` misses it picks
    /// among the remaining free cells directly. Returns `None` only when the
    /// board has no free cell left.
    pub fn spawn<'a, R, I>(rng: &mut R, occupied: I, walls: &WallSet) -> Option<Food>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        let kind = FoodKind::ALL[rng.gen_range(0..FoodKind::ALL.len())];
        let is_free = |c: Cell| !walls.is_wall(c) && !occupied.clone().into_iter().any(|s| *s == c);

        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            let cell = Cell::new(rng.gen_range(0..GRID_COUNT), rng.gen_range(0..GRID_COUNT));
            if is_free(cell) {
                return Some(Food { cell, kind });
            }
        }

        log::warn!("food spawn fell back to a full scan after {FOOD_SPAWN_ATTEMPTS} draws");
        let free: Vec<Cell> = (0..GRID_COUNT)
            .flat_map(|y| (0..GRID_COUNT).map(move |x| Cell::new(x, y)))
            .filter(|c| is_free(*c))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(Food { cell: free[rng.gen_range(0..free.len())], kind })
    }
}
