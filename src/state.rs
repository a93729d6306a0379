//! Core lattice structure and helper methods.
//!
//! The lattice keeps two equally sized buffers. `front` names the one holding
//! the current generation; `step()` writes every cell of the other one and
//! then flips `front`. Direct edits always land in the front buffer.

use crate::automaton;
use crate::automaton::region::Bounds;
use crate::config::{InitialFill, LatticeConfig, RuleConfig};
use crate::error::{LatticeError, Result};

/// Largest supported side length. Both buffers together take 2·N³ bytes.
pub const MAX_SIZE: i16 = 256;

/// A single cell whose state changed during a step.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub alive: u8, // 0 = died, 1 = born
}

impl CellChange {
    #[inline]
    pub fn is_birth(&self) -> bool {
        self.alive != 0
    }
}

/// A cubic 3D lattice of live/dead cells.
pub struct Lattice {
    pub size: i16,
    pub rule: RuleConfig,
    pub generation: u64,
    pub(crate) buffers: [Vec<u8>; 2], // 0 = dead, 1 = alive
    pub(crate) front: usize,
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Lattice {
    /// A lattice with no grid yet. Call `initialize` before stepping.
    pub fn empty() -> Self {
        Lattice {
            size: 0,
            rule: RuleConfig::default(),
            generation: 0,
            buffers: [Vec::new(), Vec::new()],
            front: 0,
            pool: None,
        }
    }

    /// Allocate a `size`³ lattice with the default rule.
    pub fn new(size: i16, fill: InitialFill) -> Result<Self> {
        let mut lattice = Self::empty();
        lattice.initialize(size, fill)?;
        Ok(lattice)
    }

    /// Allocate from settings. Does not apply `initial_seed`; see `Driver`.
    pub fn with_config(config: &LatticeConfig, rule: RuleConfig) -> Result<Self> {
        let mut lattice = Self::new(config.size, config.initial_fill)?;
        lattice.rule = rule;
        lattice.set_threads(config.threads);
        Ok(lattice)
    }

    /// (Re)allocate both buffers. Resets the generation counter.
    pub fn initialize(&mut self, size: i16, fill: InitialFill) -> Result<()> {
        automaton::create_grid(self, size, fill)
    }

    /// Use a dedicated rayon pool for stepping when `threads > 1`.
    pub fn set_threads(&mut self, threads: usize) {
        self.pool = automaton::stepping::build_pool(threads);
    }

    pub fn is_initialized(&self) -> bool {
        self.size > 0 && !self.buffers[self.front].is_empty()
    }

    /// Total number of cells (N³).
    #[inline]
    pub fn volume(&self) -> usize {
        let n = self.size.max(0) as usize;
        n * n * n
    }

    /// Get the linear index for a 3D coordinate.
    #[inline]
    pub fn index(&self, x: i16, y: i16, z: i16) -> usize {
        automaton::index_of(self.size, x, y, z)
    }

    #[inline]
    pub fn in_bounds(&self, x: i16, y: i16, z: i16) -> bool {
        automaton::in_bounds(self.size, x, y, z)
    }

    /// The current generation, one byte per cell in x,y,z order.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.buffers[self.front]
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.buffers[self.front]
    }

    /// Out-of-bounds coordinates read as dead.
    pub fn is_alive(&self, x: i16, y: i16, z: i16) -> bool {
        automaton::grid::is_alive(self, x, y, z)
    }

    pub fn set_cell(&mut self, x: i16, y: i16, z: i16, alive: bool) {
        automaton::grid::set_cell(self, x, y, z, alive)
    }

    /// Flip one cell in place. `None` when out of bounds.
    pub fn toggle_cell(&mut self, x: i16, y: i16, z: i16) -> Option<bool> {
        automaton::grid::toggle_cell(self, x, y, z)
    }

    pub fn clear(&mut self) {
        automaton::grid::clear(self)
    }

    pub fn population(&self) -> usize {
        automaton::grid::population(self)
    }

    /// Live neighbors of a cell under the current topology. 0 out of bounds.
    pub fn count_neighbors(&self, x: i16, y: i16, z: i16) -> u8 {
        if !self.is_initialized() || !self.in_bounds(x, y, z) {
            return 0;
        }
        automaton::count_neighbors(
            self.cells(),
            self.size,
            x,
            y,
            z,
            automaton::Topology::from_wrap(self.rule.wrap),
        )
    }

    /// Advance one generation and return the cells that changed.
    pub fn step(&mut self) -> Result<Vec<CellChange>> {
        automaton::step_automaton(self)
    }

    /// Randomize with `rule.random_ratio`, then step once.
    ///
    /// Returns the seed used and the cells the implicit step changed.
    pub fn randomize(&mut self, seed: Option<&str>) -> Result<(String, Vec<CellChange>)> {
        let ratio = self.rule.random_ratio;
        automaton::fill_random(self, seed, ratio)
    }

    /// Copy a box of the current generation out, z,y,x order.
    pub fn extract_region(&self, out_buf: &mut [u8], bounds: Bounds) -> Result<usize> {
        automaton::extract_region(self, out_buf, bounds)
    }

    pub fn import_region(&mut self, in_buf: &[u8], bounds: Bounds) -> Result<usize> {
        automaton::import_region(self, in_buf, bounds)
    }

    /// Fails with `NotInitialized` or `SizeMismatch` when the buffers are unusable.
    pub(crate) fn check_ready(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(LatticeError::NotInitialized);
        }
        let expected = self.volume();
        for buffer in &self.buffers {
            if buffer.len() != expected {
                return Err(LatticeError::SizeMismatch {
                    expected,
                    found: buffer.len(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lattice")
            .field("size", &self.size)
            .field("rule", &self.rule)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .field("threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_initialized() {
        let mut lattice = Lattice::empty();
        assert!(!lattice.is_initialized());
        assert!(matches!(lattice.step(), Err(LatticeError::NotInitialized)));
        assert!(matches!(
            lattice.randomize(Some("abc")),
            Err(LatticeError::NotInitialized)
        ));
        // Cell access on an empty lattice is absorbed
        assert!(!lattice.is_alive(0, 0, 0));
        assert_eq!(lattice.toggle_cell(0, 0, 0), None);
    }

    #[test]
    fn test_size_mismatch_is_reported() {
        let mut lattice = Lattice::new(4, InitialFill::Dead).unwrap();
        lattice.buffers[1].truncate(10);
        match lattice.step() {
            Err(LatticeError::SizeMismatch { expected, found }) => {
                assert_eq!(expected, 64);
                assert_eq!(found, 10);
            }
            other => panic!("expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_with_config() {
        let config = LatticeConfig {
            size: 6,
            initial_fill: InitialFill::Dead,
            initial_seed: None,
            threads: 2,
        };
        let rule = RuleConfig {
            wrap: true,
            ..RuleConfig::default()
        };
        let lattice = Lattice::with_config(&config, rule).unwrap();
        assert_eq!(lattice.volume(), 216);
        assert!(lattice.rule.wrap);
        assert_eq!(lattice.population(), 0);
        assert!(lattice.pool.is_some());
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Lattice::new(4, InitialFill::Dead).unwrap();
        let b = Lattice::new(4, InitialFill::Dead).unwrap();
        a.rule.wrap = true;
        a.set_cell(1, 1, 1, true);
        assert!(!b.rule.wrap);
        assert!(!b.is_alive(1, 1, 1));
    }
}
