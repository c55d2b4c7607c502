//! **runpath-core** — Weighted-grid routing with run-length constraints (core types).
//!
//! This crate provides the foundational types used across the *runpath*
//! ecosystem: geometry primitives, cardinal directions, and the read-only
//! cost grid parsed from digit input.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point, manhattan};
pub use grid::{CostGrid, GridError};
