//! C FFI layer for host renderers.
//!
//! This module exports C ABI functions for use from a renderer or scripting
//! host. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and error-to-status-code conversion.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod rule;
pub mod seeding;

pub use grid::{
    vl_clear, vl_count_neighbors, vl_initialize, vl_is_alive, vl_population, vl_set_cell,
    vl_step, vl_toggle_cell,
};
pub use lifecycle::{vl_create, vl_destroy, vl_get_generation};
pub use region::{vl_extract_region, vl_import_region};
pub use rule::{vl_get_rule, vl_set_rule};
pub use seeding::vl_randomize;
