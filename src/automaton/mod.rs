//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for allocating the lattice,
//! counting neighbors, stepping, seeding, and extracting/importing regions.
//! The `Lattice` methods and the FFI layer in `ffi/` call these functions.

pub mod grid;
pub mod neighbors;
pub mod region;
pub mod seeding;
pub mod stepping;

pub use grid::{coords_of, create_grid, in_bounds, index_of};
pub use neighbors::{count_neighbors, Topology};
pub use region::{extract_region, import_region};
pub use seeding::{fill_random, make_seed};
pub use stepping::{apply_rule, step_automaton};
