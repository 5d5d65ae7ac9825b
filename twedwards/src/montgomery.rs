//! Montgomery-form arithmetic: the x-only constant-time ladder and
//! Okeya–Sakurai y-coordinate recovery.
//!
//! The curve is `B·v² = u³ + A·u² + u`, birationally equivalent to the
//! Edwards form via `u = (1+y)/(1−y)`, `v = u/x`. The ladder only ever
//! touches `(U : W)` fractions of the u-coordinate and performs exactly
//! [`LadderScalar::BITS`] identical steps, with cswaps driven by the XOR of
//! consecutive scalar bits and bracketed by a leading and trailing swap.

use crate::{CurveField, ExtendedPoint, LadderScalar, MontgomeryParams, Scratchpad, scalar};
use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// x-only Montgomery point `(U : W)` with `u = U/W`; the point at infinity
/// is `W = 0`.
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryXPoint<C: MontgomeryParams> {
    pub(crate) u: C::FieldElement,
    pub(crate) w: C::FieldElement,
}

/// Full projective Montgomery point `(X : Y : Z)`, produced by y-recovery.
/// `Z = 0` encodes the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct ProjectiveMontgomeryPoint<C: MontgomeryParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C: MontgomeryParams> MontgomeryXPoint<C> {
    /// The point at infinity `(1 : 0)`.
    pub const INFINITY: Self = Self {
        u: <C::FieldElement as Field>::ONE,
        w: <C::FieldElement as Field>::ZERO,
    };

    /// Construct from an affine u-coordinate.
    pub fn from_affine_u(u: C::FieldElement) -> Self {
        Self {
            u,
            w: C::FieldElement::ONE,
        }
    }

    /// The u-coordinate fraction of an Edwards point: `(Z + Y : Z − Y)`.
    pub fn from_edwards(p: &ExtendedPoint<C>) -> Self {
        Self {
            u: p.z + p.y,
            w: p.z - p.y,
        }
    }

    /// Numerator of the u fraction.
    pub fn u(&self) -> C::FieldElement {
        self.u
    }

    /// Denominator of the u fraction.
    pub fn w(&self) -> C::FieldElement {
        self.w
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> Choice {
        self.w.is_zero()
    }

    /// Affine u-coordinate, or zero for the point at infinity.
    pub fn to_affine_u(&self) -> C::FieldElement {
        self.u * self.w.invert_or_zero()
    }
}

impl<C: MontgomeryParams> ConditionallySelectable for MontgomeryXPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            u: C::FieldElement::conditional_select(&a.u, &b.u, choice),
            w: C::FieldElement::conditional_select(&a.w, &b.w, choice),
        }
    }
}

impl<C: MontgomeryParams> ConstantTimeEq for MontgomeryXPoint<C> {
    /// Equality of the affine u-coordinates, by cross-multiplication.
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.u * other.w).ct_eq(&(other.u * self.w))
    }
}

impl<C: MontgomeryParams> PartialEq for MontgomeryXPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: MontgomeryParams> Eq for MontgomeryXPoint<C> {}

impl<C: MontgomeryParams> ProjectiveMontgomeryPoint<C> {
    /// X coordinate.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Z coordinate; zero encodes the point at infinity.
    pub fn z(&self) -> C::FieldElement {
        self.z
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> Choice {
        self.z.is_zero()
    }
}

/// One ladder step: a differential addition of `p` and `q` (whose
/// difference has affine u-coordinate `x1`) combined with a doubling of
/// `p`. All temporaries live in the caller's scratchpad.
fn ladder_step<C: MontgomeryParams>(
    p: &mut MontgomeryXPoint<C>,
    q: &mut MontgomeryXPoint<C>,
    x1: &C::FieldElement,
    pad: &mut Scratchpad<C::FieldElement>,
) {
    pad.r0 = p.u + p.w;
    pad.r1 = p.u - p.w;
    pad.r2 = q.u + q.w;
    pad.r3 = q.u - q.w;
    pad.r4 = pad.r0.square();
    pad.r5 = pad.r1.square();
    pad.r6 = pad.r4 - pad.r5;
    p.u = pad.r4 * pad.r5;
    pad.r3 *= pad.r0;
    pad.r2 *= pad.r1;
    p.w = pad.r6 * (pad.r5 + C::A_PLUS_TWO_OVER_FOUR * pad.r6);
    pad.r0 = pad.r2 + pad.r3;
    q.u = pad.r0.square();
    pad.r1 = pad.r2 - pad.r3;
    q.w = pad.r1.square() * *x1;
}

/// Constant-time Montgomery ladder.
///
/// Returns the x-only pair `([k]P, [k+1]P)` for the point `P` with affine
/// u-coordinate `x1`. Exactly [`LadderScalar::BITS`] steps are performed,
/// scanning scalar bits from the most significant end; the conditional
/// swaps are driven by the XOR of each bit with its predecessor, and the
/// final swap is applied after the loop.
pub fn ladder<C: MontgomeryParams>(
    x1: &C::FieldElement,
    k: &C::Scalar,
    pad: &mut Scratchpad<C::FieldElement>,
) -> (MontgomeryXPoint<C>, MontgomeryXPoint<C>) {
    let repr = k.to_le_repr();
    let bytes = repr.as_ref();

    let mut p0 = MontgomeryXPoint::INFINITY;
    let mut p1 = MontgomeryXPoint::from_affine_u(*x1);
    let mut prev = Choice::from(0);

    for i in (0..<C::Scalar as LadderScalar>::BITS).rev() {
        let bit = scalar::bit(bytes, i);
        MontgomeryXPoint::conditional_swap(&mut p0, &mut p1, prev ^ bit);
        ladder_step::<C>(&mut p0, &mut p1, x1, pad);
        prev = bit;
    }
    MontgomeryXPoint::conditional_swap(&mut p0, &mut p1, prev);

    (p0, p1)
}

/// Okeya–Sakurai y-coordinate recovery.
///
/// Given the affine coordinates `(u, v)` of `P` and the x-only pair
/// `([k]P, [k+1]P)` out of the ladder, reconstructs the full projective
/// `[k]P`. When `[k]P` or `[k+1]P` is the point at infinity the result
/// has `Z = 0`; callers are responsible for handling those cases (see
/// [`ExtendedPoint::scalar_mul`]).
pub fn recover_y<C: MontgomeryParams>(
    u: &C::FieldElement,
    v: &C::FieldElement,
    p0: &MontgomeryXPoint<C>,
    p1: &MontgomeryXPoint<C>,
) -> ProjectiveMontgomeryPoint<C> {
    let t0 = *u * p0.w;
    let t1 = p0.u + t0;
    let t2 = (p0.u - t0).square() * p1.u;
    let t3 = C::MONTGOMERY_A.double() * p0.w;
    let t4 = t1 + t3;
    let t5 = *u * p0.u + p0.w;
    let t6 = (t4 * t5 - t3 * p0.w) * p1.w;
    let y = t6 - t2;
    let t7 = C::MONTGOMERY_B.double() * *v * p0.w * p1.w;
    ProjectiveMontgomeryPoint {
        x: t7 * p0.u,
        y,
        z: t7 * p0.w,
    }
}

/// x-only Diffie–Hellman: the affine u-coordinate of `[k]P` for the point
/// with affine u-coordinate `u`, or zero if the result is the point at
/// infinity.
pub fn mul_x<C: MontgomeryParams>(
    u: &C::FieldElement,
    k: &C::Scalar,
    pad: &mut Scratchpad<C::FieldElement>,
) -> C::FieldElement {
    let (p0, _) = ladder::<C>(u, k, pad);
    p0.to_affine_u()
}
