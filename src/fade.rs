//! Per-cell fade levels for renderers.
//!
//! Not part of the authoritative lattice state. A renderer feeds it the
//! change delta from each step and calls `decay` once per frame; newly born
//! cells jump to full size and dead cells shrink geometrically toward a floor.

use crate::state::{CellChange, Lattice};

/// Level a dead cell settles at.
pub const FADE_FLOOR: f32 = 0.00001;
/// Per-frame multiplier applied to dead cells above the floor.
pub const FADE_FACTOR: f32 = 0.9;

#[derive(Clone, Debug)]
pub struct FadeBuffer {
    size: i16,
    levels: Vec<f32>,
}

impl FadeBuffer {
    /// Levels matching the lattice's current generation.
    pub fn new(lattice: &Lattice) -> Self {
        let mut fade = FadeBuffer {
            size: lattice.size,
            levels: Vec::new(),
        };
        fade.sync(lattice);
        fade
    }

    /// Reset every level from full state. Use after randomize, clear, or
    /// initialize, when there is no step delta to follow.
    pub fn sync(&mut self, lattice: &Lattice) {
        self.size = lattice.size;
        self.levels.clear();
        self.levels.extend(
            lattice
                .cells()
                .iter()
                .map(|&c| if c != 0 { 1.0 } else { FADE_FLOOR }),
        );
    }

    /// Reset from full state after a step that followed a fresh fill, where
    /// every filled cell started at full level. Cells that died in that step
    /// keep full level and fade out from there.
    pub fn sync_after_fill(&mut self, lattice: &Lattice, changes: &[CellChange]) {
        self.sync(lattice);
        for change in changes.iter().filter(|c| !c.is_birth()) {
            if let Some(level) = self.slot(change.x, change.y, change.z) {
                *level = 1.0;
            }
        }
    }

    /// Births go to full level. Deaths keep their level and start decaying.
    pub fn apply_changes(&mut self, changes: &[CellChange]) {
        for change in changes.iter().filter(|c| c.is_birth()) {
            if let Some(level) = self.slot(change.x, change.y, change.z) {
                *level = 1.0;
            }
        }
    }

    /// Set a level after a direct edit. Removed cells snap to the floor.
    pub fn set(&mut self, x: i16, y: i16, z: i16, alive: bool) {
        if let Some(level) = self.slot(x, y, z) {
            *level = if alive { 1.0 } else { FADE_FLOOR };
        }
    }

    /// One frame of decay for every dead cell.
    pub fn decay(&mut self, lattice: &Lattice) {
        for (level, &cell) in self.levels.iter_mut().zip(lattice.cells()) {
            if cell == 0 && *level > FADE_FLOOR {
                *level *= FADE_FACTOR;
            }
        }
    }

    /// Out-of-bounds coordinates read as the floor.
    pub fn level(&self, x: i16, y: i16, z: i16) -> f32 {
        if !crate::automaton::in_bounds(self.size, x, y, z) {
            return FADE_FLOOR;
        }
        self.levels
            .get(crate::automaton::index_of(self.size, x, y, z))
            .copied()
            .unwrap_or(FADE_FLOOR)
    }

    pub fn levels(&self) -> &[f32] {
        &self.levels
    }

    fn slot(&mut self, x: i16, y: i16, z: i16) -> Option<&mut f32> {
        if !crate::automaton::in_bounds(self.size, x, y, z) {
            return None;
        }
        self.levels
            .get_mut(crate::automaton::index_of(self.size, x, y, z))
    }
}
