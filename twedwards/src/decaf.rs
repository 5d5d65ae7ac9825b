//! Decaf point compression for cofactor-4 untwisted Edwards curves.
//!
//! Decaf quotients the subgroup of even points by the 2-torsion
//! `{(0, 1), (0, −1)}`, yielding a group of prime order with a canonical
//! fixed-length encoding: every element has exactly one valid encoding,
//! and decoding rejects everything else.

use crate::{
    CurveField, DecafParams, EdwardsParams, ExtendedPoint, MontgomeryParams, Scratchpad,
};
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use ff::{Field, PrimeField};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// An element of the prime-order Decaf group over curve `C`.
///
/// Internally a representative even point in extended coordinates; the
/// equality relation identifies representatives differing by 2-torsion.
#[derive(Clone, Copy, Debug)]
pub struct DecafPoint<C: DecafParams>(pub(crate) ExtendedPoint<C>);

/// The canonical byte encoding of a [`DecafPoint`]: the little-endian
/// bytes of the field element `s`.
#[derive(Clone, Copy)]
pub struct CompressedDecaf<C: DecafParams>(pub <C::FieldElement as PrimeField>::Repr);

impl<C: DecafParams> fmt::Debug for CompressedDecaf<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes: &[u8] = self.0.as_ref();
        f.debug_tuple("CompressedDecaf").field(&bytes).finish()
    }
}

impl<C: DecafParams> DecafPoint<C> {
    /// The identity element.
    pub const IDENTITY: Self = Self(ExtendedPoint::IDENTITY);

    /// Generator of the Decaf group.
    pub fn generator() -> Self {
        Self(ExtendedPoint::generator())
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> Choice {
        self.0.x.is_zero()
    }

    /// The representative point in extended coordinates.
    pub fn representative(&self) -> ExtendedPoint<C> {
        self.0
    }

    /// Wrap an extended point as a Decaf element.
    ///
    /// Fails unless the point is even, i.e. lies in the image of doubling;
    /// the prime-order subgroup consists exactly of the even points.
    pub fn try_from_point(point: &ExtendedPoint<C>) -> CtOption<Self> {
        let one_minus_d = C::FieldElement::ONE - C::EDWARDS_D;
        let radicand = one_minus_d * (point.z + point.y) * (point.z - point.y);
        let (is_square, _) = radicand.inv_sqrt();
        CtOption::new(Self(*point), is_square | radicand.is_zero())
    }

    /// Compress to the canonical encoding.
    ///
    /// With `R = 1/sqrt((1−d)·(Z+Y)·(Z−Y))` and `U = (1−d)·R`, flips the
    /// sign of `R` to that of `−2·U·Z` and encodes
    /// `s = |U·(R·(Z·X − d·Y·T) + Y)|`. The square root always exists for
    /// even points; for the identity the radicand is zero and `s = 0`.
    pub fn compress(&self) -> CompressedDecaf<C> {
        let p = &self.0;
        let one_minus_d = C::FieldElement::ONE - C::EDWARDS_D;
        let (_, ir) = (one_minus_d * (p.z + p.y) * (p.z - p.y)).inv_sqrt();
        let u = one_minus_d * ir;
        let r = ir.cneg((-(u.double() * p.z)).is_negative());
        let s = (u * (r * (p.z * p.x - C::EDWARDS_D * p.y * p.t) + p.y)).abs();
        CompressedDecaf(s.to_repr())
    }
}

impl<C: DecafParams> CompressedDecaf<C> {
    /// The all-zero encoding of the identity.
    pub fn identity() -> Self {
        Self(<C::FieldElement as PrimeField>::Repr::default())
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Decompress, validating the encoding.
    ///
    /// Rejects non-canonical field encodings, negative `s`, and values of
    /// `s` for which the decoding square root does not exist. Decoding the
    /// output of [`DecafPoint::compress`] always succeeds and round-trips.
    pub fn decompress(&self) -> CtOption<DecafPoint<C>> {
        C::FieldElement::from_repr(self.0).and_then(|s| {
            let non_negative = !s.is_negative();
            let ss = s.square();
            let x = s.double();
            let z = C::FieldElement::ONE + ss;
            let four_d = C::EDWARDS_D.double().double();
            let u = z.square() - four_d * ss;
            let (mut ok, mut v) = (u * ss).inv_sqrt();
            // s = 0 zeroes the radicand; it decodes to the identity.
            ok |= ss.is_zero();
            v = v.cneg((u * v).is_negative());
            let mut w = v * s * (C::FieldElement::ONE.double() - z);
            w.conditional_assign(&C::FieldElement::ONE, s.is_zero());
            let y = w * z;
            let t = w * x;
            CtOption::new(
                DecafPoint(ExtendedPoint { x, y, z, t }),
                ok & non_negative,
            )
        })
    }
}

impl<C: DecafParams> ConditionallySelectable for DecafPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ExtendedPoint::conditional_select(&a.0, &b.0, choice))
    }
}

impl<C: DecafParams> ConstantTimeEq for DecafPoint<C> {
    /// Coset equality: `X1·Y2 == X2·Y1` identifies representatives that
    /// differ by a 2-torsion translate.
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.0.x * other.0.y).ct_eq(&(other.0.x * self.0.y))
    }
}

impl<C: DecafParams> PartialEq for DecafPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: DecafParams> Eq for DecafPoint<C> {}

impl<C: DecafParams> ConstantTimeEq for CompressedDecaf<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_ref().ct_eq(other.0.as_ref())
    }
}

impl<C: DecafParams> PartialEq for CompressedDecaf<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: DecafParams> Eq for CompressedDecaf<C> {}

impl<C: DecafParams> Default for DecafPoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: DecafParams> DefaultIsZeroes for DecafPoint<C> {}

impl<C: DecafParams> Neg for DecafPoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<C: DecafParams> Neg for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn neg(self) -> DecafPoint<C> {
        -*self
    }
}

impl<C: DecafParams> Add<&DecafPoint<C>> for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn add(self, rhs: &DecafPoint<C>) -> DecafPoint<C> {
        DecafPoint(self.0.add(&rhs.0))
    }
}

impl<C: DecafParams> Sub<&DecafPoint<C>> for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn sub(self, rhs: &DecafPoint<C>) -> DecafPoint<C> {
        DecafPoint(self.0.add(&-rhs.0))
    }
}

define_point_add_variants!(DecafPoint, crate::DecafParams);
define_point_sub_variants!(DecafPoint, crate::DecafParams);

impl<C: DecafParams + MontgomeryParams> DecafPoint<C> {
    /// Constant-time scalar multiplication; see
    /// [`ExtendedPoint::scalar_mul`].
    pub fn scalar_mul(&self, k: &C::Scalar, pad: &mut Scratchpad<C::FieldElement>) -> Self {
        Self(self.0.scalar_mul(k, pad))
    }

    /// Map a (hash-derived) field element to a group element via
    /// Elligator 2 and cofactor clearing.
    pub fn from_uniform(r: &C::FieldElement) -> Self {
        Self(crate::map_to_subgroup::<C>(r))
    }
}

impl<C: DecafParams + MontgomeryParams> Mul<&<C as EdwardsParams>::Scalar> for &DecafPoint<C> {
    type Output = DecafPoint<C>;

    fn mul(self, rhs: &<C as EdwardsParams>::Scalar) -> DecafPoint<C> {
        let mut pad = Scratchpad::new();
        self.scalar_mul(rhs, &mut pad)
    }
}

