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

/// Ed448-Goldilocks parameter bundle: the complete Edwards curve
/// `x² + y² = 1 − 39081x²y²` over `GF(2⁴⁴⁸ − 2²²⁴ − 1)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ed448Goldilocks;

impl EdwardsParams for Ed448Goldilocks {
    type FieldElement = FieldElement;
    type Scalar = Scalar;

    const EDWARDS_A: FieldElement = FieldElement::ONE;
    const EDWARDS_D: FieldElement = FieldElement::from_u64(39081).neg();
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "5ec00cc72ba826268e93008be1803b431165b62af71aae1264a4d3a324e36dea67170f477065149eda36bf22a6151d22ed0ded6bc670194f",
        ),
        FieldElement::from_hex_vartime(
            "14fa30f25b790898adc8d74e2c13bdfdc4397ce61cffd33ad7c2a0051e9c78874098a36c7373ea4b62c7c9563720768824bcb66e71463f69",
        ),
    );
    const COFACTOR: u32 = 4;
}

impl MontgomeryParams for Ed448Goldilocks {
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

impl DecafParams for Ed448Goldilocks {}

/// Ed448-Goldilocks point in affine coordinates.
pub type AffinePoint = twedwards::AffinePoint<Ed448Goldilocks>;

/// Ed448-Goldilocks point in projective coordinates.
pub type ProjectivePoint = twedwards::ProjectivePoint<Ed448Goldilocks>;

/// Ed448-Goldilocks point in extended coordinates.
pub type ExtendedPoint = twedwards::ExtendedPoint<Ed448Goldilocks>;

/// Element of the prime-order quotient group on Ed448-Goldilocks.
pub type DecafPoint = twedwards::DecafPoint<Ed448Goldilocks>;

/// Decaf-compressed Ed448-Goldilocks group element.
pub type CompressedDecaf = twedwards::CompressedDecaf<Ed448Goldilocks>;

/// x-only point on the birationally equivalent Montgomery curve.
pub type MontgomeryXPoint = twedwards::MontgomeryXPoint<Ed448Goldilocks>;

twedwards::impl_scalar_mul_variants!(ExtendedPoint, Scalar);
twedwards::impl_scalar_mul_variants!(DecafPoint, Scalar);

/// Create a scratchpad sized for this curve's field.
pub fn scratchpad() -> Scratchpad<FieldElement> {
    Scratchpad::new()
}

/// Decode a Decaf-compressed group element from its 56-byte encoding.
pub fn from_compressed(bytes: &[u8; 56]) -> Result<DecafPoint> {
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
    twedwards::mul_x::<Ed448Goldilocks>(u, k, pad)
}
