//! runpath — minimum-cost routes on weighted digit grids.
//!
//! Usage:
//!
//! ```text
//! runpath <grid-file>                  # both presets: nimble (1-3), heavy (4-10)
//! runpath <grid-file> <min> <max>      # explicit run bounds
//! ```
//!
//! The grid file holds one row per line, ASCII digits only. Prints the
//! minimum cost of a route from the top-left to the bottom-right cell, or
//! `unreachable` when no route satisfies the run bounds.

use std::process::ExitCode;

use runpath_core::CostGrid;
use runpath_search::{RouteSearch, RunBounds};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("runpath: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, bounds) = match args.as_slice() {
        [path] => (path, None),
        [path, min, max] => {
            let min: u8 = min.parse()?;
            let max: u8 = max.parse()?;
            (path, Some(RunBounds::new(min, max)?))
        }
        _ => return Err("usage: runpath <grid-file> [min_run max_run]".into()),
    };

    let text = std::fs::read_to_string(path)?;
    let grid = CostGrid::parse(&text)?;
    let mut search = RouteSearch::new(grid.width(), grid.height());

    match bounds {
        Some(b) => print_cost("cost", search.min_cost(&grid, b)),
        None => {
            print_cost("nimble", search.min_cost(&grid, RunBounds::NIMBLE));
            print_cost("heavy", search.min_cost(&grid, RunBounds::HEAVY));
        }
    }
    Ok(())
}

fn print_cost(label: &str, cost: Option<i32>) {
    match cost {
        Some(c) => println!("{label}: {c}"),
        None => println!("{label}: unreachable"),
    }
}
