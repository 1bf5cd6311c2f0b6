//! Grid pathfinding engine library crate.
//!
//! A dense wall grid plus four frontier-ordering strategies (A*, Dijkstra,
//! Greedy Best-First, BFS) behind one search engine, with a query driver
//! that replans whenever the grid or the endpoints change. Rendering and
//! input wiring live outside this crate; the [`solver::Solver`] API is the
//! boundary they consume.

pub mod error;
pub mod grid;
pub mod search;
pub mod solver;

pub use error::{NoPathFound, SearchResult};
pub use grid::{Cell, Grid, Neighborhood};
pub use search::{Path, Search, StrategyKind};
pub use solver::Solver;
