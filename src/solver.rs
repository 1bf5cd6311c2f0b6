//! The query driver: owns the grid, the current strategy, and the current
//! source/destination, and recomputes the path whenever any of them change.
//!
//! Execution is single-threaded and run-to-completion: each query runs
//! atomically against the grid as it stands, and callers must not edit the
//! grid while a query is in flight.

use std::time::Duration;

use glam::IVec2;
use strum::IntoEnumIterator;
use tracing::info;

use crate::error::SearchResult;
use crate::grid::Grid;
use crate::search::{Path, Search, StrategyKind};

/// The outcome of running one strategy during a comparison sweep.
#[derive(Debug)]
pub struct StrategyReport {
    pub kind: StrategyKind,
    pub result: SearchResult<Path>,
    /// Number of cells the run finalized.
    pub expanded: usize,
    pub elapsed: Duration,
}

/// Orchestrates path queries over an editable grid.
///
/// Every mutation (endpoint move, wall edit, strategy switch) discards the
/// cached path and reruns the strategy from scratch; queries never reuse
/// state from earlier runs.
pub struct Solver {
    grid: Grid,
    search: Search,
    source: IVec2,
    destination: IVec2,
    path: Option<Path>,
}

impl Solver {
    /// Creates a driver and runs the initial query.
    pub fn new(grid: Grid, kind: StrategyKind, source: IVec2, destination: IVec2) -> Self {
        let mut solver = Solver {
            grid,
            search: Search::new(kind),
            source,
            destination,
            path: None,
        };
        solver.replan();
        solver
    }

    /// Moves both endpoints and runs a full fresh query.
    pub fn query(&mut self, source: IVec2, destination: IVec2) -> SearchResult<Path> {
        self.source = source;
        self.destination = destination;
        self.replan()
    }

    /// Reruns the current strategy against the current grid and endpoints.
    pub fn replan(&mut self) -> SearchResult<Path> {
        let result = self.search.find_path(&self.grid, self.source, self.destination);

        info!(
            strategy = %self.search.kind(),
            expanded = self.search.closed_set().len(),
            elapsed = ?self.search.elapsed(),
            found = result.is_ok(),
            "replanned"
        );

        self.path = result.clone().ok();
        result
    }

    /// Edits a wall and reruns the query.
    pub fn set_wall(&mut self, position: IVec2, blocked: bool) -> SearchResult<Path> {
        self.grid.set_blocked(position, blocked);
        self.replan()
    }

    /// Moves the source and reruns the query.
    pub fn set_source(&mut self, source: IVec2) -> SearchResult<Path> {
        self.source = source;
        self.replan()
    }

    /// Moves the destination and reruns the query.
    pub fn set_destination(&mut self, destination: IVec2) -> SearchResult<Path> {
        self.destination = destination;
        self.replan()
    }

    /// Switches strategy. The new strategy starts with no run state.
    pub fn set_strategy(&mut self, kind: StrategyKind) -> SearchResult<Path> {
        self.search = Search::new(kind);
        self.replan()
    }

    /// Runs every strategy back-to-back against the current grid snapshot
    /// and endpoints. Each run owns its own state; none of them touches the
    /// driver's cached path.
    pub fn compare_all(&self) -> Vec<StrategyReport> {
        StrategyKind::iter()
            .map(|kind| {
                let mut search = Search::new(kind);
                let result = search.find_path(&self.grid, self.source, self.destination);
                StrategyReport {
                    kind,
                    result,
                    expanded: search.closed_set().len(),
                    elapsed: search.elapsed(),
                }
            })
            .collect()
    }

    /// The path found by the most recent query, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Wall-clock duration of the most recent query.
    pub fn elapsed(&self) -> Duration {
        self.search.elapsed()
    }

    /// The active search, exposing open/closed sets and per-cell costs for
    /// visualization.
    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> IVec2 {
        self.source
    }

    pub fn destination(&self) -> IVec2 {
        self.destination
    }
}
