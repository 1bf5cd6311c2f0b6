//! The path result type and predecessor-chain reconstruction.

use std::f32::consts::SQRT_2;

use glam::IVec2;

/// An ordered sequence of cells from source to destination, both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    cells: Vec<IVec2>,
}

impl Path {
    /// The cells of the path, source first.
    pub fn cells(&self) -> &[IVec2] {
        &self.cells
    }

    /// The number of cells in the path. A path from a cell to itself has
    /// length 1.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a reconstructed path holds at least the source.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn source(&self) -> IVec2 {
        self.cells[0]
    }

    pub fn destination(&self) -> IVec2 {
        self.cells[self.cells.len() - 1]
    }

    /// Returns `true` if the path passes through the given cell.
    pub fn contains(&self, position: IVec2) -> bool {
        self.cells.contains(&position)
    }

    /// Total cost of the path under the step model: `√2` per diagonal step,
    /// `1` per orthogonal step.
    pub fn total_cost(&self) -> f32 {
        self.cells
            .windows(2)
            .map(|pair| {
                let delta = pair[1] - pair[0];
                if delta.x != 0 && delta.y != 0 {
                    SQRT_2
                } else {
                    1.0
                }
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a IVec2;
    type IntoIter = std::slice::Iter<'a, IVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Walks predecessor links back from a terminal cell and returns the chain
/// in source-to-destination order. The source is the cell with no
/// predecessor and is included. Only meaningful immediately after a
/// successful run; `predecessor` must form an acyclic chain ending at the
/// source.
pub(crate) fn reconstruct<F>(predecessor: F, terminal: IVec2) -> Path
where
    F: Fn(IVec2) -> Option<IVec2>,
{
    let mut cells = vec![terminal];
    let mut current = terminal;

    while let Some(previous) = predecessor(current) {
        cells.push(previous);
        current = previous;
    }

    cells.reverse();
    Path { cells }
}
