//! Wall layout helpers for setting up demo boards and test fixtures.

use glam::IVec2;
use rand::Rng;

use crate::grid::Grid;

/// Randomly blocks cells with a probability that grows toward the top of the
/// grid: a cell at row `y` is blocked when `random() * y / height` exceeds
/// the threshold. A threshold of `0.3` gives a board that is open near the
/// bottom and dense near the top.
pub fn scatter_walls<R: Rng>(grid: &mut Grid, rng: &mut R, threshold: f32) {
    let height = grid.height() as f32;
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            if rng.random::<f32>() * y as f32 / height > threshold {
                grid.set_blocked(IVec2::new(x, y), true);
            }
        }
    }
}

/// Blocks every odd row and every odd column, leaving free cells only on
/// even/even coordinates. The starting point for maze carving.
pub fn lattice_walls(grid: &mut Grid) {
    for x in (1..grid.width() as i32).step_by(2) {
        for y in 0..grid.height() as i32 {
            grid.set_blocked(IVec2::new(x, y), true);
        }
    }

    for x in 0..grid.width() as i32 {
        for y in (1..grid.height() as i32).step_by(2) {
            grid.set_blocked(IVec2::new(x, y), true);
        }
    }
}

/// Blocks an entire row, optionally leaving a single gap at column `gap`.
pub fn wall_row(grid: &mut Grid, y: i32, gap: Option<i32>) {
    for x in 0..grid.width() as i32 {
        if Some(x) != gap {
            grid.set_blocked(IVec2::new(x, y), true);
        }
    }
}

/// Blocks an entire column, optionally leaving a single gap at row `gap`.
pub fn wall_column(grid: &mut Grid, x: i32, gap: Option<i32>) {
    for y in 0..grid.height() as i32 {
        if Some(y) != gap {
            grid.set_blocked(IVec2::new(x, y), true);
        }
    }
}
