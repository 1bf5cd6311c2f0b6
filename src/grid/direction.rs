use std::f32::consts::SQRT_2;

use glam::IVec2;

/// A step from a cell to one of its eight neighbors.
///
/// The declaration order is the order in which neighbors are enumerated,
/// which in turn decides which of two equal-priority frontier cells a search
/// expands first. Changing it changes the paths returned on ties.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpperRight,
    Up,
    UpperLeft,
    Left,
    LowerLeft,
    Down,
    LowerRight,
}

impl Direction {
    /// All eight directions, in neighbor-enumeration order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpperRight,
        Direction::Up,
        Direction::UpperLeft,
        Direction::Left,
        Direction::LowerLeft,
        Direction::Down,
        Direction::LowerRight,
    ];

    /// The four orthogonal directions, in neighbor-enumeration order.
    pub const CARDINAL: [Direction; 4] = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    /// Returns `true` if this step changes both coordinates.
    pub fn is_diagonal(&self) -> bool {
        let offset = self.as_ivec2();
        offset.x != 0 && offset.y != 0
    }

    /// The cost of taking this step: `√2` for diagonal moves, `1` otherwise.
    pub fn step_cost(&self) -> f32 {
        if self.is_diagonal() {
            SQRT_2
        } else {
            1.0
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Right => IVec2::X,
            Direction::UpperRight => IVec2::new(1, 1),
            Direction::Up => IVec2::Y,
            Direction::UpperLeft => IVec2::new(-1, 1),
            Direction::Left => -IVec2::X,
            Direction::LowerLeft => IVec2::new(-1, -1),
            Direction::Down => -IVec2::Y,
            Direction::LowerRight => IVec2::new(1, -1),
        }
    }
}
