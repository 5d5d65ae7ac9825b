#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_lifetimes, unused_qualifications)]

mod field;
mod scalar;

pub use crate::{field::FieldElement, scalar::Scalar};
pub use twedwards::{self, Error, Result};

use twedwards::{DecafParams, EdwardsParams, MontgomeryParams, Scratchpad};

/// Curve1174 parameter bundle: the complete Edwards curve
/// `x² + y² = 1 − 1174x²y²` over `GF(2²⁵¹ − 9)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Curve1174;

impl EdwardsParams for Curve1174 {
    type FieldElement = FieldElement;
    type Scalar = Scalar;

    const EDWARDS_A: FieldElement = FieldElement::ONE;
    const EDWARDS_D: FieldElement = FieldElement::from_u64(1174).neg();
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "da9ee2bc273f121665cd2e496ad921c090a129c0e7ae4393478c30ea0cbb7f03",
        ),
        FieldElement::from_hex_vartime(
            "0e36469bbfb1cca46b973fafe2dee24f0c0e846911845666ccb77fd4822fb706",
        ),
    );
    const COFACTOR: u32 = 4;
}

impl MontgomeryParams for Curve1174 {
    // A = 2(a + d)/(a − d), B = 4/(a − d).
    const MONTGOMERY_A: FieldElement = {
        let inv = Self::EDWARDS_A.sub(&Self::EDWARDS_D).const_invert();
        Self::EDWARDS_A.add(&Self::EDWARDS_D).double().multiply(&inv)
    };
    const MONTGOMERY_B: FieldElement = {
        let inv = Self::EDWARDS_A.sub(&Self::EDWARDS_D).const_invert();
        FieldElement::from_u64(4).multiply(&inv)
    };
    const A_PLUS_TWO_OVER_FOUR: FieldElement = {
        let four_inv = FieldElement::from_u64(4).const_invert();
        Self::MONTGOMERY_A
            .add(&FieldElement::from_u64(2))
            .multiply(&four_inv)
    };
    // p ≡ 7 (mod 8), so −2 is a quadratic nonresidue.
    const NONRESIDUE: FieldElement = FieldElement::from_u64(2).neg();
}

impl DecafParams for Curve1174 {}

/// Curve1174 point in affine coordinates.
pub type AffinePoint = twedwards::AffinePoint<Curve1174>;

/// Curve1174 point in projective coordinates.
pub type ProjectivePoint = twedwards::ProjectivePoint<Curve1174>;

/// Curve1174 point in extended coordinates.
pub type ExtendedPoint = twedwards::ExtendedPoint<Curve1174>;

/// Element of Curve1174's prime-order quotient group.
pub type DecafPoint = twedwards::DecafPoint<Curve1174>;

/// Decaf-compressed Curve1174 group element.
pub type CompressedDecaf = twedwards::CompressedDecaf<Curve1174>;

/// x-only point on the birationally equivalent Montgomery curve.
pub type MontgomeryXPoint = twedwards::MontgomeryXPoint<Curve1174>;

twedwards::impl_scalar_mul_variants!(ExtendedPoint, Scalar);
twedwards::impl_scalar_mul_variants!(DecafPoint, Scalar);

/// Create a scratchpad sized for this curve's field.
pub fn scratchpad() -> Scratchpad<FieldElement> {
    Scratchpad::new()
}

/// Decode a Decaf-compressed group element from its 32-byte encoding.
pub fn from_compressed(bytes: &[u8; 32]) -> Result<DecafPoint> {
    Option::from(twedwards::CompressedDecaf((*bytes).into()).decompress())
        .ok_or(Error::InvalidEncoding)
}

/// x-only Diffie–Hellman over the birational Montgomery form.
///
/// Returns the affine u-coordinate of `[k]P` for the point with affine
/// u-coordinate `u`, or zero when the result is the point at infinity.
pub fn diffie_hellman(
    k: &Scalar,
    u: &FieldElement,
    pad: &mut Scratchpad<FieldElement>,
) -> FieldElement {
    twedwards::mul_x::<Curve1174>(u, k, pad)
}
