//! Strategy descriptors for the search engine.
//!
//! The four algorithms share one expansion loop and differ only in the key
//! used to order the frontier and in whether edge costs and heuristics are
//! consulted, so they are described by data rather than four copies of the
//! loop.

use strum_macros::{Display, EnumIter};

/// The family of frontier-ordering policies understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StrategyKind {
    /// Orders by `g + h` with a Euclidean heuristic; cost-optimal on this
    /// grid since the heuristic is admissible.
    #[strum(serialize = "A*")]
    AStar,
    /// Orders by accumulated cost alone.
    #[strum(serialize = "Dijkstra")]
    Dijkstra,
    /// Orders by the heuristic alone; fast but not cost-optimal.
    #[strum(serialize = "Greedy Best-First")]
    GreedyBestFirst,
    /// Expands in insertion order (FIFO frontier).
    #[strum(serialize = "BFS")]
    BreadthFirst,
}

impl StrategyKind {
    /// Whether steps are weighted `√2`/`1`. Strategies that ignore edge
    /// cost treat every step as unit cost.
    pub fn uses_edge_cost(self) -> bool {
        matches!(self, StrategyKind::AStar | StrategyKind::Dijkstra)
    }

    /// Whether the Euclidean distance to the destination is computed for
    /// reached cells.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, StrategyKind::AStar | StrategyKind::GreedyBestFirst)
    }

    /// The frontier ordering key for a cell with the given bookkeeping.
    /// `seq` is the cell's insertion sequence number, which only BFS orders
    /// by.
    pub(crate) fn ordering_key(self, g: f32, h: f32, seq: u32) -> f32 {
        match self {
            StrategyKind::AStar => g + h,
            StrategyKind::Dijkstra => g,
            StrategyKind::GreedyBestFirst => h,
            StrategyKind::BreadthFirst => seq as f32,
        }
    }
}
