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

use twedwards::{
    EdwardsParams, MontgomeryParams, Scratchpad,
    subtle::Choice,
};

/// Curve25519 parameter bundle: the twisted Edwards curve
/// `−x² + y² = 1 − (121665/121666)x²y²` over `GF(2²⁵⁵ − 19)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Curve25519;

impl EdwardsParams for Curve25519 {
    type FieldElement = FieldElement;
    type Scalar = Scalar;

    const EDWARDS_A: FieldElement = FieldElement::ONE.neg();
    const EDWARDS_D: FieldElement = {
        let ratio = FieldElement::from_u64(121665)
            .multiply(&FieldElement::from_u64(121666).const_invert());
        ratio.neg()
    };
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "1ad5258f602d56c9b2a7259560c72c695cdcd6fd31e2a4c0fe536ecdd3366921",
        ),
        FieldElement::from_hex_vartime(
            "5866666666666666666666666666666666666666666666666666666666666666",
        ),
    );
    const COFACTOR: u32 = 8;
}

impl MontgomeryParams for Curve25519 {
    // A = 2(a + d)/(a − d) = 486662, B = 4/(a − d).
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
    // p ≡ 5 (mod 8), so 2 is a quadratic nonresidue.
    const NONRESIDUE: FieldElement = FieldElement::from_u64(2);
}

/// Curve25519 point in affine coordinates.
pub type AffinePoint = twedwards::AffinePoint<Curve25519>;

/// Curve25519 point in projective coordinates.
pub type ProjectivePoint = twedwards::ProjectivePoint<Curve25519>;

/// Curve25519 point in extended coordinates.
pub type ExtendedPoint = twedwards::ExtendedPoint<Curve25519>;

/// x-only point on the Montgomery form `v² = u³ + 486662u² + u`.
pub type MontgomeryXPoint = twedwards::MontgomeryXPoint<Curve25519>;

twedwards::impl_scalar_mul_variants!(ExtendedPoint, Scalar);

/// Ed25519 wire format point: the y-coordinate in little-endian with the
/// sign of x in the top bit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl CompressedEdwardsY {
    /// Compress an affine point into wire format.
    pub fn from_affine(point: &AffinePoint) -> Self {
        let (x_is_negative, y_repr) = point.compress();
        let mut bytes: [u8; 32] = y_repr.into();
        bytes[31] |= x_is_negative.unwrap_u8() << 7;
        Self(bytes)
    }

    /// Borrow the encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Decompress into an affine point.
    ///
    /// Returns [`Error::InvalidEncoding`] if the y-coordinate is not a
    /// canonical field element, no point with that y-coordinate exists, or
    /// the sign bit is set with `x = 0`.
    pub fn decompress(&self) -> Result<AffinePoint> {
        let mut y_bytes = self.0;
        let x_is_negative = Choice::from(y_bytes[31] >> 7);
        y_bytes[31] &= 0x7f;
        Option::from(AffinePoint::decompress(&y_bytes.into(), x_is_negative))
            .ok_or(Error::InvalidEncoding)
    }
}

impl From<&AffinePoint> for CompressedEdwardsY {
    fn from(point: &AffinePoint) -> Self {
        Self::from_affine(point)
    }
}

/// Create a scratchpad sized for this curve's field.
pub fn scratchpad() -> Scratchpad<FieldElement> {
    Scratchpad::new()
}

/// x-only Diffie–Hellman over the Montgomery form.
///
/// Returns the affine u-coordinate of `[k]P` for the point with affine
/// u-coordinate `u`, or zero when the result is the point at infinity.
pub fn diffie_hellman(
    k: &Scalar,
    u: &FieldElement,
    pad: &mut Scratchpad<FieldElement>,
) -> FieldElement {
    twedwards::mul_x::<Curve25519>(u, k, pad)
}
