//! Generation stepping with lonely/crowded/birth rules.
//!
//! Reads always hit the front buffer and writes always land in the back
//! buffer. Every back cell is written before the buffers trade roles, so a
//! caller never observes a half-built generation.

use rayon::prelude::*;

use super::grid::coords_of;
use super::neighbors::{count_neighbors, Topology};
use crate::config::RuleConfig;
use crate::error::Result;
use crate::state::{CellChange, Lattice};

/// Next state of one cell given its current state and live neighbor count.
///
/// - Alive with `nc <= lonely`: dies
/// - Alive with `nc >= crowded`: dies
/// - Dead with `nc == birth`: born
#[inline]
pub fn apply_rule(rule: &RuleConfig, alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors > rule.lonely && neighbors < rule.crowded
    } else {
        neighbors == rule.birth
    }
}

/// Build a dedicated pool for stepping. Serial stepping for 0 or 1 threads.
pub fn build_pool(threads: usize) -> Option<rayon::ThreadPool> {
    if threads <= 1 {
        return None;
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(err) => {
            log::warn!("falling back to serial stepping: {}", err);
            None
        }
    }
}

/// Compute one z-plane of the next generation.
fn fill_slab(current: &[u8], slab: &mut [u8], size: i16, z: i16, rule: &RuleConfig) {
    let topology = Topology::from_wrap(rule.wrap);
    let n = size as usize;
    for y in 0..size {
        for x in 0..size {
            let local = y as usize * n + x as usize;
            let global = z as usize * n * n + local;
            let neighbors = count_neighbors(current, size, x, y, z, topology);
            slab[local] = apply_rule(rule, current[global] != 0, neighbors) as u8;
        }
    }
}

/// Step the lattice forward by one generation.
///
/// Returns every cell whose state flipped, in linear index order.
pub fn step_automaton(lattice: &mut Lattice) -> Result<Vec<CellChange>> {
    lattice.check_ready()?;

    let size = lattice.size;
    let n = size as usize;
    let plane = n * n;
    let rule = lattice.rule;

    let [a, b] = &mut lattice.buffers;
    let (current, next) = if lattice.front == 0 {
        (&*a, b)
    } else {
        (&*b, a)
    };

    match &lattice.pool {
        Some(pool) => pool.install(|| {
            next.par_chunks_mut(plane)
                .enumerate()
                .for_each(|(z, slab)| fill_slab(current, slab, size, z as i16, &rule));
        }),
        None => {
            for (z, slab) in next.chunks_mut(plane).enumerate() {
                fill_slab(current, slab, size, z as i16, &rule);
            }
        }
    }

    let changes: Vec<CellChange> = current
        .iter()
        .zip(next.iter())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(idx, (_, &after))| {
            let (x, y, z) = coords_of(size, idx);
            CellChange { x, y, z, alive: after }
        })
        .collect();

    lattice.front ^= 1;
    lattice.generation += 1;

    log::debug!(
        "generation {}: {} changed, {} alive",
        lattice.generation,
        changes.len(),
        lattice.population()
    );

    Ok(changes)
}
