//! Region extraction and import FFI functions.

use crate::automaton::region::Bounds;
use crate::state::Lattice;

/// Extracts a box of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This matches the layout expected by `vl_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y) * (max_z - min_z)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn vl_extract_region(
    ptr: *const Lattice,
    out_buf: *mut u8,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let bounds = Bounds::new((min_x, min_y, min_z), (max_x, max_y, max_z));
    let buf = std::slice::from_raw_parts_mut(out_buf, bounds.volume());
    (*ptr).extract_region(buf, bounds).unwrap_or(0) as u64
}

/// Imports a box of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching `vl_extract_region`).
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y) * (max_z - min_z)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn vl_import_region(
    ptr: *mut Lattice,
    in_buf: *const u8,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let bounds = Bounds::new((min_x, min_y, min_z), (max_x, max_y, max_z));
    let buf = std::slice::from_raw_parts(in_buf, bounds.volume());
    (*ptr).import_region(buf, bounds).unwrap_or(0) as u64
}
