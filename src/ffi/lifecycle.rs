//! Lattice creation, destruction, and generation queries.

use crate::state::Lattice;

/// Creates a new lattice handle without a grid and returns an opaque pointer.
///
/// Call `vl_initialize()` before stepping or randomizing.
///
/// # Safety
/// The returned pointer must eventually be freed with `vl_destroy()`.
#[no_mangle]
pub extern "C" fn vl_create() -> *mut Lattice {
    Box::into_raw(Box::new(Lattice::empty()))
}

/// Destroys a lattice and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `vl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn vl_destroy(ptr: *mut Lattice) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_generation(ptr: *const Lattice) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let lattice = vl_create();
            assert!(!lattice.is_null());
            assert!(!(*lattice).is_initialized());

            // Should not crash
            vl_destroy(lattice);
        }
    }

    #[test]
    fn test_initial_generation() {
        unsafe {
            let lattice = vl_create();
            assert_eq!(vl_get_generation(lattice), 0);
            vl_destroy(lattice);
        }
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            // Should not crash
            vl_destroy(ptr::null_mut());
            assert_eq!(vl_get_generation(ptr::null()), 0);
        }
    }
}
