//! Grid allocation, cell access, and stepping.

use crate::config::InitialFill;
use crate::state::{CellChange, Lattice};

/// Allocates a `size`³ grid. `fill_alive` non-zero starts every cell alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or invalid size)
#[no_mangle]
pub unsafe extern "C" fn vl_initialize(ptr: *mut Lattice, size: i16, fill_alive: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let fill = if fill_alive != 0 {
        InitialFill::Alive
    } else {
        InitialFill::Dead
    };
    match (*ptr).initialize(size, fill) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn vl_is_alive(ptr: *const Lattice, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).is_alive(x, y, z) as u8
}

/// Places (alive != 0) or removes a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn vl_set_cell(ptr: *mut Lattice, x: i16, y: i16, z: i16, alive: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set_cell(x, y, z, alive != 0);
}

/// Flips a cell in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// The new state (0 or 1), or -1 if the coordinate is out of bounds or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_toggle_cell(ptr: *mut Lattice, x: i16, y: i16, z: i16) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    match (*ptr).toggle_cell(x, y, z) {
        Some(alive) => alive as i32,
        None => -1,
    }
}

/// Kills every cell without advancing the generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
#[no_mangle]
pub unsafe extern "C" fn vl_clear(ptr: *mut Lattice) {
    if ptr.is_null() {
        return;
    }
    (*ptr).clear();
}

/// Live neighbors of a cell under the current topology.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// 0 if ptr is null, the lattice has no grid, or the cell is out of bounds.
#[no_mangle]
pub unsafe extern "C" fn vl_count_neighbors(ptr: *const Lattice, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).count_neighbors(x, y, z)
}

/// Number of live cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
#[no_mangle]
pub unsafe extern "C" fn vl_population(ptr: *const Lattice) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).population() as u64
}

/// Advances the lattice by one generation.
///
/// Up to `out_cap` changed cells are copied into `out_changes`, in linear
/// index order. `out_changes` may be null to only get the count.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `out_changes` must be null or point to at least `out_cap` `CellChange` slots
///
/// # Returns
/// Total number of changed cells (may exceed `out_cap`), or -1 on error
/// (null pointer or no grid).
#[no_mangle]
pub unsafe extern "C" fn vl_step(
    ptr: *mut Lattice,
    out_changes: *mut CellChange,
    out_cap: u64,
) -> i64 {
    if ptr.is_null() {
        return -1;
    }

    let changes = match (*ptr).step() {
        Ok(changes) => changes,
        Err(_) => return -1,
    };

    if !out_changes.is_null() && out_cap > 0 {
        let n = changes.len().min(out_cap as usize);
        let out = std::slice::from_raw_parts_mut(out_changes, n);
        out.copy_from_slice(&changes[..n]);
    }

    changes.len() as i64
}
