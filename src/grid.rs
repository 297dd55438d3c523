//! The fixed playing field and the two value types that live on it.

/// Cells per side of the square board.
pub const GRID_COUNT: i32 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step as (dx, dy); y grows downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A turn from `current` to `next` is valid unless it keeps the same
/// heading or reverses into the neck.
pub fn is_valid_turn(current: Direction, next: Direction) -> bool {
    current != next && current.opposite() != next
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_COUNT).contains(&self.x) && (0..GRID_COUNT).contains(&self.y)
    }

    /// The four orthogonal neighbours, including ones off the board.
    pub fn neighbors(self) -> [Cell; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}
