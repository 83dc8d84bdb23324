//! # npn4-rs: NPN canonicalization of 4-input Boolean functions
//!
//! **`npn4-rs`** classifies 4-input Boolean functions under **NPN
//! equivalence**: output Negation, input Permutation, and per-input
//! Negation. The 65536 possible 16-bit truth tables fall into exactly
//! **222** equivalence classes; this crate computes, for every function,
//! its class representative together with the exact transform mapping the
//! representative back onto it.
//!
//! ## Why canonicalize?
//!
//! Logic-rewriting engines extract small sub-circuit "cuts" (up to 4
//! inputs), compute each cut's truth table, and look up a precomputed
//! implementation. Keying that database by the 222 canonical classes
//! instead of all 65536 functions shrinks it by two orders of magnitude;
//! the recorded transform (inverted) remaps the stored implementation onto
//! the cut's actual input ordering and polarities.
//!
//! ## Key properties
//!
//! - **Minimum-value convention**: the representative of a class is its
//!   numerically smallest truth table, found as the first member hit by an
//!   ascending scan of the whole domain.
//! - **Bit-exact contract**: the permutation enumeration order and the
//!   packed transform layout (permutation index in bits 0..4, input
//!   negations in bits 5..8, output negation in bit 9) are stable and safe
//!   to persist.
//! - **Fail fast**: the 222-class invariant is asserted when the table is
//!   built; any deviation means the transform group itself is broken and
//!   construction aborts rather than serving corrupt answers.
//!
//! ## Quick start
//!
//! ```rust
//! use npn4_rs::canon::CanonTable;
//! use npn4_rs::tv::Tv4;
//!
//! // The process-wide table, built once on first use.
//! let canon = CanonTable::global();
//!
//! // f = x0 XOR x1
//! let f = Tv4::new(Tv4::var(0).bits() ^ Tv4::var(1).bits());
//!
//! let (rep, xform) = canon.canonical_form(f);
//! assert!(rep <= f);
//!
//! // The transform maps the representative back onto f...
//! assert_eq!(xform.apply(rep), f);
//! // ...and its inverse maps f onto the representative.
//! assert_eq!(xform.inverse().apply(f), rep);
//! ```
//!
//! ## Core components
//!
//! - **[`tv`]**: the 16-bit truth-table type [`Tv4`][crate::tv::Tv4] and
//!   its bit-level operations (input negation, input relabeling).
//! - **[`perm`]**: the 24 permutations of the input positions, their fixed
//!   enumeration, signatures, composition, and inversion.
//! - **[`npn`]**: the 768-member transform group
//!   [`Npn4`][crate::npn::Npn4] (apply, inverse, compose, pack/unpack).
//! - **[`canon`]**: the [`CanonTable`][crate::canon::CanonTable] built by
//!   the ascending scan, with O(1) canonical-form lookups.
//! - **[`support`]**: which inputs a function actually depends on
//!   (metadata for callers, not needed for canonicalization).

pub mod canon;
pub mod npn;
pub mod perm;
pub mod support;
pub mod tv;
