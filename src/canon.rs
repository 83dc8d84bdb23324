//! NPN canonicalization of all 65536 4-input functions.
//!
//! [`CanonTable`] assigns every truth table its orbit representative under
//! the 768-member NPN group and the exact transform mapping the
//! representative onto it. Representatives follow the minimum-value
//! convention: scanning `t = 0..65536` in ascending order, the first member
//! of each orbit encountered becomes its representative, which is also the
//! numerically smallest member.
//!
//! The table is a pure function of nothing; compute it once (or use
//! [`CanonTable::global`]) and share it for the process lifetime.

use log::debug;
use once_cell::sync::Lazy;

use crate::npn::Npn4;
use crate::perm::Perm4;
use crate::tv::Tv4;

/// Number of NPN equivalence classes of 4-input functions.
pub const NUM_NPN4_CLASSES: usize = 222;

const TABLE_SIZE: usize = 1 << 16;

/// The canonicalization table over all 65536 truth tables.
///
/// # Invariants
///
/// - Exactly [`NUM_NPN4_CLASSES`] distinct representatives occur; this is
///   checked at construction and a violation is fatal, since it means the
///   transform group itself is implemented incorrectly and every derived
///   answer would be corrupt.
/// - `representative(t) <= t` for every `t`.
/// - `transform(t).apply(representative(t)) == t` for every `t`.
///
/// # Examples
///
/// ```
/// use npn4_rs::canon::CanonTable;
/// use npn4_rs::tv::Tv4;
///
/// let canon = CanonTable::global();
/// let f = Tv4::new(0xCAFE);
/// let (rep, xform) = canon.canonical_form(f);
/// assert!(rep <= f);
/// assert_eq!(xform.apply(rep), f);
/// ```
pub struct CanonTable {
    rep: Vec<u16>,
    xform: Vec<u16>, // packed, see `Npn4::pack`
}

impl CanonTable {
    /// Builds the table by the ascending scan.
    ///
    /// Each `t` that is not yet covered by an earlier orbit starts a new
    /// class; all 768 transforms of `t` are then enumerated (output
    /// negation outermost, then the 16 input-negation masks, then the 24
    /// permutations) and every still-uncovered image is recorded with `t`
    /// as its representative and the first transform that reached it.
    ///
    /// # Panics
    ///
    /// Panics if the class count differs from [`NUM_NPN4_CLASSES`].
    pub fn new() -> Self {
        #[cfg(debug_assertions)]
        check_perm_group();

        let mut rep = vec![0u16; TABLE_SIZE];
        let mut xform = vec![0u16; TABLE_SIZE];
        let mut assigned = vec![false; TABLE_SIZE];
        let mut num_classes = 0usize;

        for t in 0..TABLE_SIZE {
            if assigned[t] {
                continue;
            }
            // t is the first member of its orbit seen in ascending order.
            num_classes += 1;
            debug!("class {}: representative {:04x}", num_classes, t);

            let tv = Tv4::new(t as u16);
            for &oinv in &[false, true] {
                for iinv in 0..16u8 {
                    for &perm in Perm4::all() {
                        let x = Npn4::from_parts(oinv, iinv, perm);
                        let image = x.apply(tv).bits() as usize;
                        if !assigned[image] {
                            assigned[image] = true;
                            rep[image] = t as u16;
                            xform[image] = x.pack();
                        }
                    }
                }
            }
            debug_assert!(assigned[t]);
        }

        debug!("canonicalization done: {} classes", num_classes);
        assert_eq!(
            num_classes, NUM_NPN4_CLASSES,
            "NPN canonicalization produced a wrong class count: the transform group is defective"
        );

        CanonTable { rep, xform }
    }

    /// Returns the process-wide table, built on first use.
    pub fn global() -> &'static CanonTable {
        static TABLE: Lazy<CanonTable> = Lazy::new(CanonTable::new);
        &TABLE
    }

    /// Returns the representative of `tv`'s class and the transform with
    /// `transform.apply(representative) == tv`.
    #[inline]
    pub fn canonical_form(&self, tv: Tv4) -> (Tv4, Npn4) {
        (self.representative(tv), self.transform(tv))
    }

    /// Returns the representative of `tv`'s class.
    #[inline]
    pub fn representative(&self, tv: Tv4) -> Tv4 {
        Tv4::new(self.rep[tv.bits() as usize])
    }

    /// Returns the transform mapping the representative onto `tv`.
    #[inline]
    pub fn transform(&self, tv: Tv4) -> Npn4 {
        Npn4::unpack(self.xform[tv.bits() as usize])
    }

    /// Returns true iff `tv` is the representative of its own class.
    #[inline]
    pub fn is_representative(&self, tv: Tv4) -> bool {
        self.rep[tv.bits() as usize] == tv.bits()
    }

    /// Returns the entry for `tv` in its embeddable form:
    /// `(representative, packed transform)`.
    #[inline]
    pub fn packed_entry(&self, tv: Tv4) -> (u16, u16) {
        let t = tv.bits() as usize;
        (self.rep[t], self.xform[t])
    }

    /// Iterates over the 222 representatives in ascending order.
    pub fn representatives(&self) -> impl Iterator<Item = Tv4> + '_ {
        (0..TABLE_SIZE)
            .filter(move |&t| self.rep[t] as usize == t)
            .map(|t| Tv4::new(t as u16))
    }

    /// Number of equivalence classes (always [`NUM_NPN4_CLASSES`]).
    pub fn num_classes(&self) -> usize {
        NUM_NPN4_CLASSES
    }
}

impl Default for CanonTable {
    fn default() -> Self {
        CanonTable::new()
    }
}

/// Verifies the permutation group laws and signature bijectivity before
/// trusting the canonicalization output (debug builds only).
#[cfg(debug_assertions)]
fn check_perm_group() {
    use crate::perm::{index_of_signature, INVALID_INDEX, NUM_PERMS};

    let mut valid = 0;
    for sig in 0..=255u8 {
        if index_of_signature(sig) != INVALID_INDEX {
            valid += 1;
        }
    }
    assert_eq!(valid, NUM_PERMS);

    for (i, &perm) in Perm4::all().iter().enumerate() {
        assert_eq!(index_of_signature(perm.signature()) as usize, i);
        assert_eq!(perm.compose(perm.inverse()), Perm4::identity());
        assert_eq!(perm.inverse().compose(perm), Perm4::identity());
    }
}
