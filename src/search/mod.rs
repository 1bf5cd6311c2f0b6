//! The unified search engine.
//!
//! One expansion loop serves all four strategies; a [`StrategyKind`]
//! supplies the frontier ordering key and decides whether edge costs and
//! heuristics are consulted. All bookkeeping for a run lives in a per-run
//! arena keyed by cell index, so several [`Search`] instances can query the
//! same grid back-to-back without observing each other's state.

pub mod path;
pub mod strategy;

use std::f32::consts::SQRT_2;
use std::time::{Duration, Instant};

use glam::{IVec2, UVec2};
use tracing::{debug, trace};

use crate::error::{NoPathFound, SearchResult};
use crate::grid::Grid;

pub use path::Path;
pub use strategy::StrategyKind;

/// Euclidean distance between two cell coordinates, the heuristic used by
/// A* and Greedy Best-First. Admissible for the `√2`/`1` step model.
pub fn euclidean(a: IVec2, b: IVec2) -> f32 {
    (a - b).as_vec2().length()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CellStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Per-run bookkeeping, indexed by flat cell index. Rebuilt at the start of
/// every query; no run observes another's state.
#[derive(Debug, Default)]
struct RunState {
    size: UVec2,
    g: Vec<f32>,
    h: Vec<f32>,
    seq: Vec<u32>,
    predecessor: Vec<Option<IVec2>>,
    status: Vec<CellStatus>,
}

impl RunState {
    fn reset(&mut self, size: UVec2) {
        let cells = (size.x * size.y) as usize;
        self.size = size;
        self.g.clear();
        self.g.resize(cells, f32::INFINITY);
        self.h.clear();
        self.h.resize(cells, 0.0);
        self.seq.clear();
        self.seq.resize(cells, 0);
        self.predecessor.clear();
        self.predecessor.resize(cells, None);
        self.status.clear();
        self.status.resize(cells, CellStatus::Unvisited);
    }

    fn index(&self, position: IVec2) -> Option<usize> {
        if position.x >= 0 && (position.x as u32) < self.size.x && position.y >= 0 && (position.y as u32) < self.size.y {
            Some(position.x as usize * self.size.y as usize + position.y as usize)
        } else {
            None
        }
    }

    fn predecessor_of(&self, position: IVec2) -> Option<IVec2> {
        self.index(position).and_then(|index| self.predecessor[index])
    }
}

/// A single search strategy instance.
///
/// Owns the run-scoped state of its queries and retains the open set, the
/// closed set (in closure order) and per-cell costs of the most recent run
/// so a visualization layer can color explored cells.
pub struct Search {
    kind: StrategyKind,
    state: RunState,
    open: Vec<IVec2>,
    closed: Vec<IVec2>,
    elapsed: Duration,
}

impl Search {
    pub fn new(kind: StrategyKind) -> Self {
        Search {
            kind,
            state: RunState::default(),
            open: Vec::new(),
            closed: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Runs a full query from `source` to `destination` over the grid.
    ///
    /// Every call is a fresh run: all state from earlier queries is
    /// discarded first. Returns the cell sequence from source to
    /// destination inclusive, or [`NoPathFound`] when the frontier empties
    /// first — including the degenerate case of a blocked or off-grid
    /// endpoint, which fails without scanning.
    pub fn find_path(&mut self, grid: &Grid, source: IVec2, destination: IVec2) -> SearchResult<Path> {
        let started = Instant::now();
        let result = self.run(grid, source, destination);
        self.elapsed = started.elapsed();

        debug!(
            strategy = %self.kind,
            expanded = self.closed.len(),
            elapsed = ?self.elapsed,
            found = result.is_ok(),
            "search finished"
        );

        result
    }

    fn run(&mut self, grid: &Grid, source: IVec2, destination: IVec2) -> SearchResult<Path> {
        self.state.reset(grid.size());
        self.open.clear();
        self.closed.clear();

        let failure = NoPathFound {
            from: source,
            to: destination,
        };

        // A blocked or off-grid endpoint can never carry a path.
        match (grid.cell(source), grid.cell(destination)) {
            (Some(src), Some(dst)) if !src.blocked && !dst.blocked => {}
            _ => return Err(failure),
        }

        let uses_edge_cost = self.kind.uses_edge_cost();
        let uses_heuristic = self.kind.uses_heuristic();
        let mut next_seq = 0u32;

        let source_index = self.state.index(source).expect("source is in bounds");
        self.state.g[source_index] = 0.0;
        if uses_heuristic {
            self.state.h[source_index] = euclidean(source, destination);
        }
        self.state.seq[source_index] = next_seq;
        next_seq += 1;
        self.state.status[source_index] = CellStatus::Open;
        self.open.push(source);

        while !self.open.is_empty() {
            // Linear scan for the minimal ordering key. Strict comparison
            // means the first-encountered minimum wins, and removal below
            // preserves relative order, so ties break by insertion order.
            let mut lowest = 0;
            for candidate in 1..self.open.len() {
                if self.ordering_key(self.open[candidate]) < self.ordering_key(self.open[lowest]) {
                    lowest = candidate;
                }
            }
            let current = self.open[lowest];

            if current == destination {
                let state = &self.state;
                return Ok(path::reconstruct(|pos| state.predecessor_of(pos), current));
            }

            self.open.remove(lowest);
            let current_index = self.state.index(current).expect("open cells are in bounds");
            self.state.status[current_index] = CellStatus::Closed;
            self.closed.push(current);
            trace!(x = current.x, y = current.y, "expanding");

            for neighbor in grid.neighbors(current) {
                let neighbor_index = self.state.index(neighbor).expect("neighbors are in bounds");

                // Closed cells are never reopened, even if a cheaper route
                // to them turns up later. Safe here: step costs are
                // non-negative and the heuristic is consistent.
                if self.state.status[neighbor_index] == CellStatus::Closed {
                    continue;
                }

                let weight = if uses_edge_cost {
                    let diagonal = neighbor.x != current.x && neighbor.y != current.y;
                    if diagonal {
                        SQRT_2
                    } else {
                        1.0
                    }
                } else {
                    1.0
                };
                let tentative = self.state.g[current_index] + weight;

                if self.state.status[neighbor_index] != CellStatus::Open {
                    self.state.status[neighbor_index] = CellStatus::Open;
                    self.state.seq[neighbor_index] = next_seq;
                    next_seq += 1;
                    self.open.push(neighbor);
                } else if tentative >= self.state.g[neighbor_index] {
                    continue;
                }

                self.state.g[neighbor_index] = tentative;
                if uses_heuristic {
                    self.state.h[neighbor_index] = euclidean(neighbor, destination);
                }
                self.state.predecessor[neighbor_index] = Some(current);
            }
        }

        Err(failure)
    }

    fn ordering_key(&self, position: IVec2) -> f32 {
        let index = self.state.index(position).expect("open cells are in bounds");
        self.kind
            .ordering_key(self.state.g[index], self.state.h[index], self.state.seq[index])
    }

    /// The frontier left over when the last run terminated.
    pub fn open_set(&self) -> &[IVec2] {
        &self.open
    }

    /// Cells finalized by the last run, in the order they were closed.
    pub fn closed_set(&self) -> &[IVec2] {
        &self.closed
    }

    /// Wall-clock duration of the last run. Observability only.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accumulated cost from the source to a cell reached by the last run.
    pub fn cost_so_far(&self, position: IVec2) -> Option<f32> {
        let index = self.state.index(position)?;
        match self.state.status[index] {
            CellStatus::Unvisited => None,
            _ => Some(self.state.g[index]),
        }
    }

    /// Heuristic estimate recorded for a cell reached by the last run.
    /// Zero for strategies that do not use a heuristic.
    pub fn estimate(&self, position: IVec2) -> Option<f32> {
        let index = self.state.index(position)?;
        match self.state.status[index] {
            CellStatus::Unvisited => None,
            _ => Some(self.state.h[index]),
        }
    }
}
