//! Truth tables of 4-input Boolean functions.
//!
//! A function `f : {0,1}^4 -> {0,1}` is stored as a [`Tv4`]: a `u16` whose
//! bit `b` holds the value of `f` at the input assignment whose input `i` is
//! `(b >> i) & 1`. Under this encoding the single-input functions have the
//! patterns:
//!
//! ```text
//! input 0: 0xAAAA   1010101010101010
//! input 1: 0xCCCC   1100110011001100
//! input 2: 0xF0F0   1111000011110000
//! input 3: 0xFF00   1111111100000000
//! ```

use std::fmt;

use once_cell::sync::Lazy;

use crate::perm::{Perm4, NUM_PERMS};

/// Bits where input `pos` is 1, for `pos` in `0..4`.
pub(crate) const INPUT_MASK_HI: [u16; 4] = [0xAAAA, 0xCCCC, 0xF0F0, 0xFF00];
/// Bits where input `pos` is 0.
pub(crate) const INPUT_MASK_LO: [u16; 4] = [0x5555, 0x3333, 0x0F0F, 0x00FF];
/// Distance between a minterm and its neighbor across input `pos`.
pub(crate) const INPUT_SHIFT: [u32; 4] = [1, 2, 4, 8];

/// Minterm relocation table: `XFORM_TBL[p][b]` is where permutation `p`
/// (by enumeration index) sends minterm `b`. Precomputed so that
/// [`Tv4::permute`] runs without re-deriving the bit relocation inside the
/// canonicalization inner loop.
static XFORM_TBL: Lazy<[[u8; 16]; NUM_PERMS]> = Lazy::new(|| {
    let mut tbl = [[0u8; 16]; NUM_PERMS];
    for (index, perm) in Perm4::all().iter().enumerate() {
        for b in 0..16usize {
            let mut new_b = 0u8;
            for i in 0..4 {
                if b & (1 << i) != 0 {
                    new_b |= 1 << perm.get(i);
                }
            }
            tbl[index][b] = new_b;
        }
    }
    tbl
});

/// The truth table of a 4-input Boolean function.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tv4(u16);

impl Tv4 {
    /// The constant-0 function.
    pub const fn const0() -> Self {
        Tv4(0x0000)
    }

    /// The constant-1 function.
    pub const fn const1() -> Self {
        Tv4(0xFFFF)
    }

    /// The projection onto input `pos`: `f(x) = x[pos]`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 4`.
    pub const fn var(pos: usize) -> Self {
        match pos {
            0 => Tv4(0xAAAA),
            1 => Tv4(0xCCCC),
            2 => Tv4(0xF0F0),
            3 => Tv4(0xFF00),
            _ => panic!("Input position out of range"),
        }
    }

    /// Wraps a raw 16-bit truth table.
    pub const fn new(bits: u16) -> Self {
        Tv4(bits)
    }

    /// Returns the raw 16-bit truth table.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns the function value at minterm `b`.
    ///
    /// # Panics
    ///
    /// Panics if `b >= 16`.
    #[inline]
    pub fn get(self, b: usize) -> bool {
        assert!(b < 16, "Minterm index out of range: {}", b);
        (self.0 >> b) & 1 != 0
    }

    /// Complements the function (output negation).
    #[inline]
    pub const fn not(self) -> Self {
        Tv4(!self.0)
    }

    /// Negates input `pos`: swaps each minterm with its neighbor across
    /// that input.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 4`.
    #[inline]
    pub fn invert_input(self, pos: usize) -> Self {
        assert!(pos < 4, "Input position out of range: {}", pos);
        let hi = self.0 & INPUT_MASK_HI[pos];
        let lo = self.0 & INPUT_MASK_LO[pos];
        Tv4((hi >> INPUT_SHIFT[pos]) | (lo << INPUT_SHIFT[pos]))
    }

    /// Relabels the inputs according to `perm`: each set minterm `b` moves
    /// to the minterm whose bit `perm[i]` equals bit `i` of `b`.
    pub fn permute(self, perm: Perm4) -> Self {
        let tbl = &XFORM_TBL[perm.index()];
        let mut bits = 0u16;
        for b in 0..16 {
            if (self.0 >> b) & 1 != 0 {
                bits |= 1 << tbl[b];
            }
        }
        Tv4(bits)
    }
}

impl fmt::Display for Tv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

impl From<u16> for Tv4 {
    fn from(bits: u16) -> Self {
        Tv4(bits)
    }
}

impl From<Tv4> for u16 {
    fn from(tv: Tv4) -> Self {
        tv.0
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_var_patterns() {
        assert_eq!(Tv4::var(0).bits(), 0xAAAA);
        assert_eq!(Tv4::var(1).bits(), 0xCCCC);
        assert_eq!(Tv4::var(2).bits(), 0xF0F0);
        assert_eq!(Tv4::var(3).bits(), 0xFF00);
        // Bit b of var(i) is bit i of b.
        for i in 0..4 {
            for b in 0..16 {
                assert_eq!(Tv4::var(i).get(b), (b >> i) & 1 != 0);
            }
        }
    }

    #[test]
    fn test_invert_input_on_projections() {
        for pos in 0..4 {
            // Negating input pos complements its projection...
            assert_eq!(Tv4::var(pos).invert_input(pos), Tv4::var(pos).not());
            // ...and leaves the other projections alone.
            for other in 0..4 {
                if other != pos {
                    assert_eq!(Tv4::var(other).invert_input(pos), Tv4::var(other));
                }
            }
        }
    }

    #[test]
    fn test_invert_input_is_involution() {
        let tv = Tv4::new(0x6A3C);
        for pos in 0..4 {
            assert_eq!(tv.invert_input(pos).invert_input(pos), tv);
        }
    }

    #[test]
    fn test_permute_identity_is_noop() {
        let tv = Tv4::new(0x9E37);
        assert_eq!(tv.permute(Perm4::identity()), tv);
    }

    #[test]
    fn test_permute_relabels_projections() {
        // Relabeling sends the projection onto input i to the projection
        // onto input perm[i].
        for &perm in Perm4::all() {
            for i in 0..4 {
                assert_eq!(Tv4::var(i).permute(perm), Tv4::var(perm.get(i)));
            }
        }
    }

    #[test]
    fn test_permute_composes() {
        let tv = Tv4::new(0x5A3C);
        for &p in Perm4::all() {
            for &q in Perm4::all() {
                assert_eq!(tv.permute(p).permute(q), tv.permute(p.compose(q)));
            }
        }
    }

    #[test]
    fn test_permute_swap_example() {
        // Swapping inputs 0 and 1 exchanges minterms 0b01 and 0b10.
        let swap01 = Perm4::new([1, 0, 2, 3]);
        let tv = Tv4::new(0b0000_0000_0000_0010); // minterm 1 only
        assert_eq!(tv.permute(swap01), Tv4::new(0b0000_0000_0000_0100));
    }
}
