//! Seeded randomization.
//!
//! Seeds are strings so they can be logged and typed back in. A string is
//! folded into a `u64` with FNV-1a, which feeds a ChaCha8 generator; the
//! same seed therefore yields the same lattice on every platform.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::stepping::step_automaton;
use crate::error::Result;
use crate::state::{CellChange, Lattice};

const SEED_LEN: usize = 8;
const SEED_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// 64-bit FNV-1a.
fn fold_seed(seed: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Generator keyed by a seed string.
pub fn rng_for_seed(seed: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(fold_seed(seed))
}

/// Synthesize an 8-letter seed from the wall clock.
pub fn make_seed() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut rng = ChaCha8Rng::seed_from_u64(millis);
    (0..SEED_LEN)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}

/// Fill every cell independently with probability `ratio` of being alive,
/// then run one step so the first rendered frame is a real generation.
///
/// Returns the seed used, synthesizing one when `seed` is `None` or empty,
/// and the cells that changed in that step relative to the fill.
pub fn fill_random(
    lattice: &mut Lattice,
    seed: Option<&str>,
    ratio: f64,
) -> Result<(String, Vec<CellChange>)> {
    lattice.check_ready()?;

    let seed = match seed {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => make_seed(),
    };
    let ratio = ratio.clamp(0.0, 1.0);
    log::info!("randomizing with seed {:?} (ratio {})", seed, ratio);

    let mut rng = rng_for_seed(&seed);
    for cell in lattice.cells_mut() {
        *cell = (rng.gen::<f64>() < ratio) as u8;
    }

    let changes = step_automaton(lattice)?;
    Ok((seed, changes))
}
