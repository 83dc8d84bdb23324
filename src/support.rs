//! Support analysis: which inputs a function actually depends on.
//!
//! Metadata for callers that want to skip irrelevant inputs; the
//! canonicalization in [`canon`][crate::canon] does not need it.

use crate::tv::{Tv4, INPUT_MASK_HI, INPUT_MASK_LO, INPUT_SHIFT};

/// Returns true iff the function's value can change when only input `pos`
/// changes.
///
/// # Panics
///
/// Panics if `pos >= 4`.
pub fn depends_on(tv: Tv4, pos: usize) -> bool {
    assert!(pos < 4, "Input position out of range: {}", pos);
    let hi = tv.bits() & INPUT_MASK_HI[pos];
    let lo = tv.bits() & INPUT_MASK_LO[pos];
    (hi >> INPUT_SHIFT[pos]) != lo
}

/// Returns the support as a 4-bit mask: bit `i` is set iff the function
/// depends on input `i`.
pub fn support_mask(tv: Tv4) -> u8 {
    let mut mask = 0u8;
    for pos in 0..4 {
        if depends_on(tv, pos) {
            mask |= 1 << pos;
        }
    }
    mask
}
