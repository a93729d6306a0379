//! Seeded randomization.

use std::ffi::{c_char, CStr};

use crate::state::Lattice;

/// Randomizes the lattice using its rule's `random_ratio`, then steps once.
///
/// `seed` may be null or empty to synthesize one. The seed actually used is
/// written to `out_seed` as a NUL-terminated string when `out_seed` is
/// non-null and `out_cap` leaves room for it.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `seed` must be null or a valid NUL-terminated UTF-8 string
/// - `out_seed` must be null or point to at least `out_cap` bytes
///
/// # Returns
/// Length of the used seed in bytes (excluding NUL), or -1 on error
/// (null pointer, invalid UTF-8, or no grid).
#[no_mangle]
pub unsafe extern "C" fn vl_randomize(
    ptr: *mut Lattice,
    seed: *const c_char,
    out_seed: *mut c_char,
    out_cap: u64,
) -> i64 {
    if ptr.is_null() {
        return -1;
    }

    let seed = if seed.is_null() {
        None
    } else {
        match CStr::from_ptr(seed).to_str() {
            Ok(s) => Some(s),
            Err(_) => return -1,
        }
    };

    let used = match (*ptr).randomize(seed) {
        Ok((used, _)) => used,
        Err(_) => return -1,
    };

    let bytes = used.as_bytes();
    if !out_seed.is_null() && out_cap > bytes.len() as u64 {
        let out = std::slice::from_raw_parts_mut(out_seed as *mut u8, bytes.len() + 1);
        out[..bytes.len()].copy_from_slice(bytes);
        out[bytes.len()] = 0;
    }

    bytes.len() as i64
}
