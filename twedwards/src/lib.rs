#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_lifetimes, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

mod affine;
mod decaf;
mod elligator;
mod error;
mod extended;
mod field;
mod montgomery;
mod projective;
mod scalar;
mod scratch;

pub mod dev;

pub use crate::{
    affine::AffinePoint,
    decaf::{CompressedDecaf, DecafPoint},
    elligator::map_to_subgroup,
    error::{Error, Result},
    extended::ExtendedPoint,
    field::CurveField,
    montgomery::{MontgomeryXPoint, ProjectiveMontgomeryPoint, ladder, mul_x, recover_y},
    projective::ProjectivePoint,
    scalar::LadderScalar,
    scratch::Scratchpad,
};
pub use ff::{self, Field, PrimeField};
pub use subtle;

use core::fmt::Debug;

/// Parameters of a (possibly twisted) Edwards curve
/// `a·x² + y² = 1 + d·x²·y²` over a prime field.
///
/// `d` must be a non-square in the field, which makes the addition law
/// complete: the unified formulas are valid for every pair of inputs,
/// including the identity and 2-torsion. An untwisted curve is simply a
/// bundle with `EDWARDS_A = ONE`.
pub trait EdwardsParams: Copy + Clone + Debug + Eq + 'static {
    /// Base field element type.
    type FieldElement: CurveField;

    /// Scalars accepted by the constant-time multiplication routines.
    type Scalar: LadderScalar;

    /// Curve coefficient `a`.
    const EDWARDS_A: Self::FieldElement;

    /// Curve coefficient `d` (non-square).
    const EDWARDS_D: Self::FieldElement;

    /// Base point generating the prime-order subgroup.
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Curve cofactor. Always a small power of two for the curves this
    /// crate targets.
    const COFACTOR: u32;
}

/// Montgomery-form constants for an Edwards curve, enabling the x-only
/// ladder and Elligator 2.
///
/// These describe the birationally-equivalent Montgomery curve
/// `B·v² = u³ + A·u² + u` with `A = 2(a+d)/(a−d)` and `B = 4/(a−d)`,
/// related to the Edwards form by `u = (1+y)/(1−y)`, `v = u/x`.
pub trait MontgomeryParams: EdwardsParams {
    /// Montgomery coefficient `A`.
    const MONTGOMERY_A: Self::FieldElement;

    /// Montgomery coefficient `B`.
    const MONTGOMERY_B: Self::FieldElement;

    /// The ladder constant `(A + 2) / 4`.
    const A_PLUS_TWO_OVER_FOUR: Self::FieldElement;

    /// A fixed quadratic non-residue of the field, used by Elligator 2.
    const NONRESIDUE: Self::FieldElement;
}

/// Marker for curves supporting Decaf compression.
///
/// Implementations must have `EDWARDS_A = ONE`, cofactor 4, and a field
/// with `p ≡ 3 (mod 4)`; under those conditions the prime-order subgroup
/// consists exactly of the even points and [`DecafPoint`] encoding is a
/// bijection onto canonical encodings.
pub trait DecafParams: EdwardsParams {}
