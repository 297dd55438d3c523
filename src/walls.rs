//! Procedural wall layout: a handful of random seeds grown into clusters.

use std::collections::HashSet;

use log::warn;
use rand::Rng;

use crate::config::{in_clear_zone, SEED_WALL_RATIO, WALL_COUNT};
use crate::grid::{Cell, Direction, GRID_COUNT};

const SEED_ATTEMPTS: usize = 4096;

#[derive(Clone, Debug, Default)]
pub struct WallSet {
    cells: HashSet<Cell>,
    // placement order, kept for rendering and for replaying the growth rule
    order: Vec<Cell>,
}

impl WallSet {
    pub fn is_wall(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.order.iter().copied()
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut walls = WallSet::default();
        for c in cells {
            walls.place(c);
        }
        walls
    }

    fn place(&mut self, c: Cell) {
        if self.cells.insert(c) {
            self.order.push(c);
        }
    }

    fn free_neighbors(&self, c: Cell) -> usize {
        c.neighbors().iter().filter(|n| !self.is_wall(**n)).count()
    }

    /// A cell may become a wall if it is on the board, outside the clear
    /// zone, not a wall yet, and keeps at least two open sides.
    fn accepts(&self, c: Cell) -> bool {
        c.in_bounds() && !in_clear_zone(c) && !self.is_wall(c) && self.free_neighbors(c) >= 2
    }

    /// Builds exactly `WALL_COUNT` walls.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_with(rng, WALL_COUNT)
    }

    /// Builds up to `count` walls. Stops early once no cell can take a wall.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let mut walls = WallSet::default();

        // Start with a few random seed walls
        let seed_count = (count as f64 * SEED_WALL_RATIO).floor() as usize;
        while walls.len() < seed_count {
            if !walls.seed(rng) {
                warn!("board saturated after {} of {count} walls", walls.len());
                return walls;
            }
        }

        // Grow clusters from seed walls
        while walls.len() < count {
            let proposals: Vec<Cell> = walls
                .order
                .iter()
                .flat_map(|w| Direction::ALL.map(|d| w.step(d)))
                .filter(|c| walls.accepts(*c))
                .collect();
            if proposals.is_empty() {
                // every cluster is boxed in; start a new one instead
                if !walls.seed(rng) {
                    warn!("board saturated after {} of {count} walls", walls.len());
                    break;
                }
                continue;
            }
            let pick = proposals[rng.gen_range(0..proposals.len())];
            walls.place(pick);
        }

        walls
    }

    /// Places one wall on a random accepted cell. Returns false when there
    /// is none left.
    fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        for _ in 0..SEED_ATTEMPTS {
            let c = Cell::new(rng.gen_range(0..GRID_COUNT), rng.gen_range(0..GRID_COUNT));
            if self.accepts(c) {
                self.place(c);
                return true;
            }
        }

        let open: Vec<Cell> = (0..GRID_COUNT)
            .flat_map(|y| (0..GRID_COUNT).map(move |x| Cell::new(x, y)))
            .filter(|c| self.accepts(*c))
            .collect();
        if open.is_empty() {
            return false;
        }
        self.place(open[rng.gen_range(0..open.len())]);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_exact_count_outside_clear_zone() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let walls = WallSet::generate(&mut rng);
            assert_eq!(walls.len(), WALL_COUNT);
            for c in walls.iter() {
                assert!(c.in_bounds(), "{c:?} off the board");
                assert!(!in_clear_zone(c), "{c:?} inside the clear zone");
            }
        }
    }

    #[test]
    fn every_placement_left_two_open_sides() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let walls = WallSet::generate(&mut rng);
            let mut replay = WallSet::default();
            for c in walls.iter() {
                assert!(replay.free_neighbors(c) >= 2, "seed {seed}: {c:?} sealed in");
                replay.place(c);
            }
        }
    }

    #[test]
    fn growth_clusters_around_seeds() {
        let mut rng = StdRng::seed_from_u64(7);
        let walls = WallSet::generate(&mut rng);
        let seeds = (WALL_COUNT as f64 * SEED_WALL_RATIO).floor() as usize;
        let grown = walls.iter().skip(seeds);
        let mut placed: HashSet<Cell> = walls.iter().take(seeds).collect();
        for c in grown {
            let touches = c.neighbors().iter().any(|n| placed.contains(n));
            assert!(touches, "{c:?} grown without an adjacent wall");
            placed.insert(c);
        }
    }

    #[test]
    fn terminates_for_dense_layouts() {
        let mut rng = StdRng::seed_from_u64(3);
        let walls = WallSet::generate_with(&mut rng, 300);
        assert_eq!(walls.len(), 300);
    }

    #[test]
    fn impossible_counts_stop_at_saturation() {
        let mut rng = StdRng::seed_from_u64(11);
        let walls = WallSet::generate_with(&mut rng, 10_000);
        let eligible = (GRID_COUNT * GRID_COUNT) as usize - 25;
        assert!(!walls.is_empty());
        assert!(walls.len() <= eligible);

        let mut replay = WallSet::default();
        for c in walls.iter() {
            assert!(!in_clear_zone(c));
            assert!(replay.free_neighbors(c) >= 2, "{c:?} sealed in");
            replay.place(c);
        }
        // nothing else fits
        let mut more = (0..GRID_COUNT).flat_map(|y| (0..GRID_COUNT).map(move |x| Cell::new(x, y)));
        assert!(!more.any(|c| walls.accepts(c)));
    }
}
