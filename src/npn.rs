//! NPN transforms of 4-input functions.
//!
//! An NPN transform combines output Negation, per-input Negation, and input
//! Permutation. The full group has `2 x 16 x 24 = 768` members and fits in
//! 10 bits when packed (see [`Npn4::pack`]).
//!
//! [`Npn4::apply`] uses one fixed operation order: complement the output
//! first (if requested), then negate inputs 0..4 in order, then relabel the
//! inputs. Changing this order changes which transform maps a representative
//! onto a given function, so it is part of the public contract.

use std::fmt;

use crate::perm::Perm4;
use crate::tv::Tv4;

/// An NPN transform over 4 inputs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Npn4 {
    oinv: bool,
    iinv: u8, // low 4 bits, bit i = negate input i
    perm: Perm4,
}

impl Npn4 {
    /// The identity transform.
    pub const fn identity() -> Self {
        Npn4 {
            oinv: false,
            iinv: 0,
            perm: Perm4::identity(),
        }
    }

    /// Creates a transform from its three attributes.
    pub fn new(oinv: bool, iinv: [bool; 4], perm: Perm4) -> Self {
        let mut mask = 0u8;
        for (i, &flag) in iinv.iter().enumerate() {
            if flag {
                mask |= 1 << i;
            }
        }
        Npn4 {
            oinv,
            iinv: mask,
            perm,
        }
    }

    /// Creates a transform from an input-negation bit mask.
    ///
    /// # Panics
    ///
    /// Panics if `iinv` has bits set above the low 4.
    pub fn from_parts(oinv: bool, iinv: u8, perm: Perm4) -> Self {
        assert!(iinv < 16, "Input negation mask out of range: {:#x}", iinv);
        Npn4 { oinv, iinv, perm }
    }

    /// Returns the output negation attribute.
    #[inline]
    pub fn oinv(self) -> bool {
        self.oinv
    }

    /// Returns the negation attribute of input `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 4`.
    #[inline]
    pub fn iinv(self, pos: usize) -> bool {
        assert!(pos < 4, "Input position out of range: {}", pos);
        (self.iinv >> pos) & 1 != 0
    }

    /// Returns the input negations as a 4-bit mask.
    #[inline]
    pub fn iinv_mask(self) -> u8 {
        self.iinv
    }

    /// Returns the destination slot of input `pos`.
    #[inline]
    pub fn iperm(self, pos: usize) -> usize {
        self.perm.get(pos)
    }

    /// Returns the input permutation.
    #[inline]
    pub fn perm(self) -> Perm4 {
        self.perm
    }

    /// Applies the transform to a truth table.
    ///
    /// Order: output negation, then input negations for inputs 0..4 in
    /// order, then input relabeling.
    pub fn apply(self, tv: Tv4) -> Tv4 {
        let mut tv = if self.oinv { tv.not() } else { tv };
        for pos in 0..4 {
            if (self.iinv >> pos) & 1 != 0 {
                tv = tv.invert_input(pos);
            }
        }
        tv.permute(self.perm)
    }

    /// Returns the inverse transform: for every `tv`,
    /// `x.inverse().apply(x.apply(tv)) == tv`.
    ///
    /// A negation applied to input `i` before relabeling must be undone at
    /// slot `perm[i]` afterwards, so the inverse negates input `perm[i]`
    /// whenever `self` negates input `i`.
    pub fn inverse(self) -> Self {
        let mut iinv = 0u8;
        for i in 0..4 {
            if (self.iinv >> i) & 1 != 0 {
                iinv |= 1 << self.perm.get(i);
            }
        }
        Npn4 {
            oinv: self.oinv,
            iinv,
            perm: self.perm.inverse(),
        }
    }

    /// Composes two transforms: for every `tv`,
    /// `self.compose(other).apply(tv) == other.apply(self.apply(tv))`.
    ///
    /// Output negations combine by XOR. A negation that `other` applies to
    /// slot `j` acts, before `self`'s relabeling, on the input `i` with
    /// `self.perm[i] == j`; so the combined negation of input `i` is
    /// `self.iinv(i) ^ other.iinv(self.perm[i])`.
    pub fn compose(self, other: Self) -> Self {
        let mut iinv = 0u8;
        for i in 0..4 {
            let flag = self.iinv(i) ^ other.iinv(self.perm.get(i));
            if flag {
                iinv |= 1 << i;
            }
        }
        Npn4 {
            oinv: self.oinv ^ other.oinv,
            iinv,
            perm: self.perm.compose(other.perm),
        }
    }

    /// Packs the transform into 10 bits for dense table storage.
    ///
    /// Layout (bit-exact, persisted by external consumers):
    /// - bits `[0..4]`: permutation index (0..23)
    /// - bits `[5..8]`: input negation mask
    /// - bit 9: output negation
    pub fn pack(self) -> u16 {
        (self.perm.index() as u16) | ((self.iinv as u16) << 5) | ((self.oinv as u16) << 9)
    }

    /// Unpacks a value produced by [`Npn4::pack`].
    ///
    /// # Panics
    ///
    /// Panics if the permutation index field is not in `[0, 24)` or if bits
    /// above bit 9 are set.
    pub fn unpack(packed: u16) -> Self {
        assert_eq!(packed >> 10, 0, "Packed transform has stray bits: {:#x}", packed);
        let perm = Perm4::from_index((packed & 0x1F) as usize);
        Npn4 {
            oinv: (packed >> 9) & 1 != 0,
            iinv: ((packed >> 5) & 0xF) as u8,
            perm,
        }
    }
}

impl Default for Npn4 {
    fn default() -> Self {
        Npn4::identity()
    }
}

impl fmt::Display for Npn4 {
    /// Formats the transform as, e.g., `~(1' 0 2 3')`: a leading `~` for
    /// output negation, then the destination slot of each input with a
    /// trailing `'` when that input is negated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.oinv {
            write!(f, "~")?;
        }
        write!(f, "(")?;
        for pos in 0..4 {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.perm.get(pos))?;
            if self.iinv(pos) {
                write!(f, "'")?;
            }
        }
        write!(f, ")")
    }
}
