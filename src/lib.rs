//! Voxel Life - 3D Game of Life lattice engine
//!
//! A fixed-size cubic lattice of live/dead cells stepped under a
//! lonely/crowded/birth rule with bounded or toroidal neighbor lookup.
//! Each step reports exactly which cells changed so a renderer can drive its
//! fade animation without diffing the lattice itself.
//!
//! The Rust API lives on [`Lattice`] and [`Driver`]; `ffi` exposes the same
//! operations through a C ABI for host renderers.

pub mod automaton;
pub mod config;
pub mod driver;
pub mod error;
pub mod fade;
pub mod ffi;
pub mod state;

pub use automaton::region::Bounds;
pub use automaton::Topology;
pub use config::{DriverConfig, InitialFill, LatticeConfig, RuleConfig, Settings};
pub use driver::{Command, Driver, Outcome};
pub use error::{LatticeError, Result};
pub use fade::FadeBuffer;
pub use state::{CellChange, Lattice, MAX_SIZE};
