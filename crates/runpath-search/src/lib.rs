//! Run-constrained shortest-path search on weighted grids.
//!
//! This crate finds the minimum total traversal cost from the top-left to
//! the bottom-right cell of a [`CostGrid`](runpath_core::CostGrid), where a
//! path is a sequence of straight-line *moves*. Each move covers
//! `min_run..=max_run` consecutive unit steps in one cardinal direction, and
//! consecutive moves must turn: a move may neither continue in nor reverse
//! the direction of its predecessor.
//!
//! The search is best-first (A*) over `(cell, arrival-direction)` states
//! with a Manhattan-distance heuristic. Bundling whole runs into single
//! transitions keeps the state space small: the run bounds are enforced at
//! edge-generation time rather than tracked per state.
//!
//! All queries go through [`RouteSearch`], which owns the per-state node
//! table and reuses it across searches, growing it only when handed a grid
//! larger than any seen before.

mod bounds;
mod route;
mod search;

pub use bounds::{BoundsError, RunBounds};
pub use route::{Move, Route};
pub use search::RouteSearch;
