//! A self-contained terminal demo: scatters walls over a grid, runs all
//! four strategies against the same board, and prints the A* result as
//! ASCII art. `RUST_LOG=debug` shows per-run engine logs.

use anyhow::Result;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridpath::grid::patterns;
use gridpath::{Grid, Path, Solver, StrategyKind};

const WIDTH: u32 = 32;
const HEIGHT: u32 = 18;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut grid = Grid::new(WIDTH, HEIGHT);
    patterns::scatter_walls(&mut grid, &mut SmallRng::seed_from_u64(0xBADCAFE), 0.3);

    let source = IVec2::new(10, 10);
    let destination = IVec2::new(1, 0);
    grid.set_blocked(source, false);
    grid.set_blocked(destination, false);

    let solver = Solver::new(grid, StrategyKind::AStar, source, destination);

    for report in solver.compare_all() {
        match &report.result {
            Ok(path) => info!(
                strategy = %report.kind,
                cells = path.len(),
                cost = path.total_cost(),
                expanded = report.expanded,
                elapsed = ?report.elapsed,
                "path found"
            ),
            Err(err) => info!(strategy = %report.kind, %err, "no path"),
        }
    }

    println!("{}", render(solver.grid(), solver.path(), source, destination));

    Ok(())
}

/// Renders the board with the topmost row first: `#` wall, `*` path cell,
/// `S`/`D` endpoints, `.` free cell.
fn render(grid: &Grid, path: Option<&Path>, source: IVec2, destination: IVec2) -> String {
    let mut out = String::new();

    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let pos = IVec2::new(x, y);
            let glyph = if pos == source {
                'S'
            } else if pos == destination {
                'D'
            } else if grid.is_blocked(pos) {
                '#'
            } else if path.is_some_and(|p| p.contains(pos)) {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}
