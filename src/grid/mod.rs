//! The grid data model: a dense 2D field of cells with mutable wall flags.
//!
//! The grid persists across queries and is the only state shared between
//! search runs. Everything a search learns about a cell (costs, predecessor)
//! lives in the run itself, not here.

pub mod direction;
pub mod patterns;

use glam::{IVec2, UVec2};
use smallvec::SmallVec;

pub use direction::Direction;

/// Which adjacency a grid uses when enumerating neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// Orthogonal and diagonal steps, eight neighbors per cell.
    #[default]
    EightWay,
    /// Orthogonal steps only, four neighbors per cell.
    FourWay,
}

impl Neighborhood {
    /// The directions enumerated by this neighborhood, in tie-break order.
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            Neighborhood::EightWay => &Direction::ALL,
            Neighborhood::FourWay => &Direction::CARDINAL,
        }
    }
}

/// A snapshot of a single grid cell.
///
/// Cells are identified by their coordinate; two cells are equal when their
/// coordinates are equal, regardless of the blocked flag.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    /// The cell's grid coordinate.
    pub position: IVec2,
    /// Whether the cell is a wall.
    pub blocked: bool,
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}

/// A fixed-size 2D map of cells, each either blocked or free.
///
/// Dimensions are immutable after construction; only the per-cell blocked
/// flag changes, via [`Grid::set_blocked`]. Coordinates outside
/// `[0, width) × [0, height)` resolve to "no such cell", which neighbor
/// enumeration relies on to skip the map edge.
#[derive(Debug, Clone)]
pub struct Grid {
    size: UVec2,
    neighborhood: Neighborhood,
    blocked: Vec<bool>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell unblocked,
    /// using the eight-way neighborhood.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_neighborhood(width, height, Neighborhood::EightWay)
    }

    /// Creates a grid with an explicit neighborhood.
    pub fn with_neighborhood(width: u32, height: u32, neighborhood: Neighborhood) -> Self {
        Grid {
            size: UVec2::new(width, height),
            neighborhood,
            blocked: vec![false; (width * height) as usize],
        }
    }

    /// The grid dimensions, in cells.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Returns `true` if the coordinate addresses a cell on this grid.
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.x < self.size.x as i32 && position.y >= 0 && position.y < self.size.y as i32
    }

    /// Bounds-checked lookup. Out-of-range coordinates return `None`; this
    /// is a normal negative result, not an error.
    pub fn cell(&self, position: IVec2) -> Option<Cell> {
        if self.contains(position) {
            Some(Cell {
                position,
                blocked: self.blocked[self.index(position)],
            })
        } else {
            None
        }
    }

    /// Returns `true` if the coordinate is on the grid and marked as a wall.
    pub fn is_blocked(&self, position: IVec2) -> bool {
        self.contains(position) && self.blocked[self.index(position)]
    }

    /// Sets or clears the wall flag at a coordinate. A no-op when the
    /// coordinate is out of range. Must not be called while a search is
    /// running over this grid.
    pub fn set_blocked(&mut self, position: IVec2, blocked: bool) {
        if self.contains(position) {
            let index = self.index(position);
            self.blocked[index] = blocked;
        }
    }

    /// Enumerates the unblocked neighbors of a cell, in the fixed tie-break
    /// order (right, upper-right, up, upper-left, left, lower-left, down,
    /// lower-right for the eight-way form).
    ///
    /// A diagonal step is only excluded when the diagonal cell itself is
    /// blocked; walls on the two adjacent orthogonal cells do not cut it.
    pub fn neighbors(&self, position: IVec2) -> SmallVec<[IVec2; 8]> {
        let mut neighbors = SmallVec::new();

        for direction in self.neighborhood.directions() {
            let candidate = position + direction.as_ivec2();
            if let Some(cell) = self.cell(candidate) {
                if !cell.blocked {
                    neighbors.push(candidate);
                }
            }
        }

        neighbors
    }

    /// The number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// Flat storage index for an in-bounds coordinate.
    pub(crate) fn index(&self, position: IVec2) -> usize {
        position.x as usize * self.size.y as usize + position.y as usize
    }
}
