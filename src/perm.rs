//! Permutations of the 4 input positions.
//!
//! Every permutation-valued quantity in this crate is keyed by an index in
//! `[0, 24)` under one fixed enumeration: lexicographic order over the
//! 4-tuples, with the identity at index 0. The enumeration order is part of
//! the public contract --- packed transforms produced by
//! [`Npn4::pack`][crate::npn::Npn4::pack] persist these indices, so the
//! order must never change.

use std::fmt;

use once_cell::sync::Lazy;

/// Number of permutations of 4 elements.
pub const NUM_PERMS: usize = 24;

/// Sentinel index for the 232 signatures that do not encode a permutation.
pub const INVALID_INDEX: u8 = 0xFF;

/// All 24 permutations in the fixed enumeration order (lexicographic).
static PERM_LIST: [Perm4; NUM_PERMS] = [
    Perm4([0, 1, 2, 3]),
    Perm4([0, 1, 3, 2]),
    Perm4([0, 2, 1, 3]),
    Perm4([0, 2, 3, 1]),
    Perm4([0, 3, 1, 2]),
    Perm4([0, 3, 2, 1]),
    Perm4([1, 0, 2, 3]),
    Perm4([1, 0, 3, 2]),
    Perm4([1, 2, 0, 3]),
    Perm4([1, 2, 3, 0]),
    Perm4([1, 3, 0, 2]),
    Perm4([1, 3, 2, 0]),
    Perm4([2, 0, 1, 3]),
    Perm4([2, 0, 3, 1]),
    Perm4([2, 1, 0, 3]),
    Perm4([2, 1, 3, 0]),
    Perm4([2, 3, 0, 1]),
    Perm4([2, 3, 1, 0]),
    Perm4([3, 0, 1, 2]),
    Perm4([3, 0, 2, 1]),
    Perm4([3, 1, 0, 2]),
    Perm4([3, 1, 2, 0]),
    Perm4([3, 2, 0, 1]),
    Perm4([3, 2, 1, 0]),
];

/// Reverse lookup: signature -> enumeration index, `INVALID_INDEX` elsewhere.
static INDEX_TBL: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut tbl = [INVALID_INDEX; 256];
    for (index, perm) in PERM_LIST.iter().enumerate() {
        tbl[perm.signature() as usize] = index as u8;
    }
    tbl
});

/// A permutation of the 4 input positions.
///
/// `perm[i]` is the destination slot of source position `i`.
///
/// # Invariants
///
/// - The 4 slots are a rearrangement of `0, 1, 2, 3`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Perm4([u8; 4]);

impl Perm4 {
    /// The identity permutation (enumeration index 0).
    pub const fn identity() -> Self {
        Perm4([0, 1, 2, 3])
    }

    /// Creates a permutation from its slot array.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is not a permutation of `0, 1, 2, 3`.
    pub fn new(slots: [u8; 4]) -> Self {
        let mut seen = [false; 4];
        for &v in slots.iter() {
            assert!(v < 4, "Permutation slot out of range: {}", v);
            assert!(!seen[v as usize], "Duplicate permutation slot: {}", v);
            seen[v as usize] = true;
        }
        Perm4(slots)
    }

    /// All 24 permutations in the fixed enumeration order.
    pub fn all() -> &'static [Perm4; NUM_PERMS] {
        &PERM_LIST
    }

    /// Returns the destination slot of source position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 4`.
    #[inline]
    pub fn get(self, pos: usize) -> usize {
        assert!(pos < 4, "Input position out of range: {}", pos);
        self.0[pos] as usize
    }

    /// Packs the permutation into its 8-bit signature (2 bits per slot,
    /// slot `i` at bits `[2i, 2i+1]`).
    #[inline]
    pub fn signature(self) -> u8 {
        (self.0[0]) | (self.0[1] << 2) | (self.0[2] << 4) | (self.0[3] << 6)
    }

    /// Decodes a signature back into a permutation, or `None` if the
    /// signature does not encode one.
    pub fn from_signature(sig: u8) -> Option<Self> {
        let index = INDEX_TBL[sig as usize];
        if index == INVALID_INDEX {
            None
        } else {
            Some(PERM_LIST[index as usize])
        }
    }

    /// Returns the index of this permutation in the fixed enumeration.
    #[inline]
    pub fn index(self) -> usize {
        let index = INDEX_TBL[self.signature() as usize];
        debug_assert_ne!(index, INVALID_INDEX);
        index as usize
    }

    /// Returns the permutation at the given enumeration index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 24`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_PERMS, "Permutation index out of range: {}", index);
        PERM_LIST[index]
    }

    /// Returns the inverse permutation: `inv[self[i]] == i` for all `i`.
    pub fn inverse(self) -> Self {
        let mut inv = [0u8; 4];
        for i in 0..4 {
            inv[self.0[i] as usize] = i as u8;
        }
        Perm4(inv)
    }

    /// Composes two permutations: apply `self`, then `other`.
    ///
    /// ```text
    /// result[i] = other[self[i]]
    /// ```
    pub fn compose(self, other: Self) -> Self {
        let mut result = [0u8; 4];
        for i in 0..4 {
            result[i] = other.0[self.0[i] as usize];
        }
        Perm4(result)
    }
}

/// Looks up the enumeration index of a signature.
///
/// Returns [`INVALID_INDEX`] for the 232 signatures that do not encode a
/// permutation.
#[inline]
pub fn index_of_signature(sig: u8) -> u8 {
    INDEX_TBL[sig as usize]
}

/// Index-to-index inversion, round-tripping through the signature table.
///
/// # Panics
///
/// Panics if `index >= 24`.
pub fn inverse_index(index: usize) -> usize {
    let sig = Perm4::from_index(index).inverse().signature();
    index_of_signature(sig) as usize
}

/// Index-to-index composition (apply `index1`, then `index2`),
/// round-tripping through the signature table.
///
/// # Panics
///
/// Panics if either index is `>= 24`.
pub fn compose_index(index1: usize, index2: usize) -> usize {
    let p1 = Perm4::from_index(index1);
    let p2 = Perm4::from_index(index2);
    index_of_signature(p1.compose(p2).signature()) as usize
}

impl fmt::Display for Perm4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {} {})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_enumeration_is_lexicographic() {
        let perms = Perm4::all();
        assert_eq!(perms[0], Perm4::identity());
        for i in 1..NUM_PERMS {
            assert!(perms[i - 1] < perms[i]);
        }
    }

    #[test]
    fn test_signature_index_bijection() {
        // Every enumerated permutation round-trips through its signature...
        for (i, perm) in Perm4::all().iter().enumerate() {
            assert_eq!(index_of_signature(perm.signature()), i as u8);
            assert_eq!(perm.index(), i);
            assert_eq!(Perm4::from_index(i), *perm);
        }
        // ...and exactly the other 232 signatures are invalid.
        let valid: Vec<u8> = Perm4::all().iter().map(|p| p.signature()).collect();
        let mut invalid = 0;
        for sig in 0..=255u8 {
            if valid.contains(&sig) {
                assert!(Perm4::from_signature(sig).is_some());
            } else {
                assert_eq!(index_of_signature(sig), INVALID_INDEX);
                assert!(Perm4::from_signature(sig).is_none());
                invalid += 1;
            }
        }
        assert_eq!(invalid, 232);
    }

    #[test]
    fn test_inverse_is_identity_both_ways() {
        for &perm in Perm4::all() {
            assert_eq!(perm.compose(perm.inverse()), Perm4::identity());
            assert_eq!(perm.inverse().compose(perm), Perm4::identity());
        }
    }

    #[test]
    fn test_index_level_ops_match_tuple_level_ops() {
        for i in 0..NUM_PERMS {
            let p = Perm4::from_index(i);
            assert_eq!(inverse_index(i), p.inverse().index());
            for j in 0..NUM_PERMS {
                let q = Perm4::from_index(j);
                assert_eq!(compose_index(i, j), p.compose(q).index());
            }
        }
    }

    #[test]
    fn test_compose_order() {
        // compose(p, q) applies p first: result[i] = q[p[i]].
        let p = Perm4::new([1, 0, 2, 3]);
        let q = Perm4::new([2, 0, 1, 3]);
        assert_eq!(p.compose(q), Perm4::new([0, 2, 1, 3]));
        assert_eq!(q.compose(p), Perm4::new([2, 1, 0, 3]));
    }

    #[test]
    #[should_panic(expected = "Permutation index out of range")]
    fn test_from_index_out_of_range_panics() {
        Perm4::from_index(24);
    }

    #[test]
    #[should_panic(expected = "Permutation index out of range")]
    fn test_compose_index_out_of_range_panics() {
        compose_index(0, 24);
    }

    #[test]
    #[should_panic(expected = "Duplicate permutation slot")]
    fn test_new_rejects_duplicates() {
        Perm4::new([0, 1, 2, 2]);
    }
}
