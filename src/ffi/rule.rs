//! Rule configuration access.

use crate::config::RuleConfig;
use crate::state::Lattice;

/// Replaces the rule. Takes effect on the next step.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_set_rule(
    ptr: *mut Lattice,
    lonely: u8,
    crowded: u8,
    birth: u8,
    wrap: u8,
    random_ratio: f64,
) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    (*ptr).rule = RuleConfig {
        lonely,
        crowded,
        birth,
        wrap: wrap != 0,
        random_ratio,
    };
    0
}

/// Copies the current rule into `out`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `out` must be a valid pointer to a `RuleConfig`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_get_rule(ptr: *const Lattice, out: *mut RuleConfig) -> i32 {
    if ptr.is_null() || out.is_null() {
        return 1;
    }
    *out = (*ptr).rule;
    0
}
