//! Procedural field generation.
//!
//! A field is a [`Grid`] of free and blocked cells. [`generate_field`]
//! produces grids satisfying two invariants:
//!
//! * connectivity: all free cells are mutually reachable via 4-adjacency;
//! * accessibility: every blocked cell has at least one free 4-neighbor.
//!
//! The target wall density is approximate. Generation draws a random grid,
//! repairs enclosed walls, validates both invariants and retries on failure;
//! an accepted grid is then refined towards the target density with
//! invariant-preserving single-cell flips.
mod generate;
mod grid;

pub use generate::{generate_field, GenerationFailure, DEFAULT_MAX_ATTEMPTS};
pub use grid::{Grid, CELL_BLOCKED, CELL_FREE};
