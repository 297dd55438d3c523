//! Eased in-between positions for drawing the snake between ticks.

use std::f64::consts::FRAC_PI_2;

use crate::grid::{Cell, Direction};

/// Sine ease-out of the tick progress.
pub fn ease(progress: f64) -> f64 {
    (progress.clamp(0.0, 1.0) * FRAC_PI_2).sin()
}

/// Fractional grid positions for each segment, head first.
///
/// The head slides in from the cell behind it along `direction`; body
/// segments lean halfway toward the segment ahead of them.
pub fn segment_positions<'a>(
    snake: impl IntoIterator<Item = &'a Cell>,
    direction: Direction,
    progress: f64,
) -> Vec<(f64, f64)> {
    let cells: Vec<Cell> = snake.into_iter().copied().collect();
    let t = ease(progress);
    let moving = progress < 1.0;

    cells
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let (x, y) = (c.x as f64, c.y as f64);
            if !moving {
                return (x, y);
            }
            if i == 0 {
                let (dx, dy) = direction.offset();
                (x - dx as f64 * (1.0 - t), y - dy as f64 * (1.0 - t))
            } else {
                let prev = cells[i - 1];
                (x + (prev.x as f64 - x) * t * 0.5, y + (prev.y as f64 - y) * t * 0.5)
            }
        })
        .collect()
}
