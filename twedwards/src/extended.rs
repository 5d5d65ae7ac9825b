//! Extended Edwards points `(X : Y : Z : T)` and scalar multiplication.
//!
//! The extended coordinates of Hisil–Wong–Carter–Dawson carry the auxiliary
//! coordinate `T = XY/Z`; every operation in this module maintains that
//! invariant. As in the projective module the formulas are unified and
//! complete for non-square `d`.

use crate::{
    AffinePoint, EdwardsParams, LadderScalar, MontgomeryParams, ProjectivePoint, Scratchpad,
    montgomery, projective::triple_parts, scalar,
};
use core::ops::{Add, Mul, Neg, Sub};
use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// A point on the curve in extended coordinates, with `x = X/Z`, `y = Y/Z`
/// and `T = XY/Z`.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedPoint<C: EdwardsParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
    pub(crate) t: C::FieldElement,
}

impl<C: EdwardsParams> ExtendedPoint<C> {
    /// The identity element `(0 : 1 : 1 : 0)`.
    pub const IDENTITY: Self = Self {
        x: <C::FieldElement as Field>::ZERO,
        y: <C::FieldElement as Field>::ONE,
        z: <C::FieldElement as Field>::ONE,
        t: <C::FieldElement as Field>::ZERO,
    };

    /// Base point of the prime-order subgroup.
    pub fn generator() -> Self {
        Self::from_affine(&AffinePoint::GENERATOR)
    }

    /// Lift an affine point to extended coordinates.
    pub fn from_affine(p: &AffinePoint<C>) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            z: C::FieldElement::ONE,
            t: p.x() * p.y(),
        }
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&self.z)
    }

    /// Whether the coordinates satisfy both the curve equation and the
    /// `T = XY/Z` invariant. Intended for validating untrusted input and
    /// for tests.
    pub fn is_valid(&self) -> Choice {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let on_curve = ((C::EDWARDS_A * xx + yy) * zz)
            .ct_eq(&(zz.square() + C::EDWARDS_D * xx * yy));
        let t_ok = (self.t * self.z).ct_eq(&(self.x * self.y));
        on_curve & t_ok & !self.z.is_zero()
    }

    /// Unified addition.
    pub fn add(&self, other: &Self) -> Self {
        let a = self.x * other.x;
        let b = self.y * other.y;
        let c = C::EDWARDS_D * self.t * other.t;
        let d = self.z * other.z;
        let e = (self.x + self.y) * (other.x + other.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - C::EDWARDS_A * a;
        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Mixed addition: `other` has `Z = 1`.
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        let t2 = other.x() * other.y();
        let a = self.x * other.x();
        let b = self.y * other.y();
        let c = C::EDWARDS_D * self.t * t2;
        let d = self.z;
        let e = (self.x + self.y) * (other.x() + other.y()) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - C::EDWARDS_A * a;
        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Addition of two affine points.
    pub fn add_affine(lhs: &AffinePoint<C>, rhs: &AffinePoint<C>) -> Self {
        let a = lhs.x() * rhs.x();
        let b = lhs.y() * rhs.y();
        let c = C::EDWARDS_D * (lhs.x() * lhs.y()) * (rhs.x() * rhs.y());
        let e = (lhs.x() + lhs.y()) * (rhs.x() + rhs.y()) - a - b;
        let f = C::FieldElement::ONE - c;
        let g = C::FieldElement::ONE + c;
        let h = b - C::EDWARDS_A * a;
        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Doubling.
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = C::EDWARDS_A * a;
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;
        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Doubling of an affine point.
    pub fn double_affine(p: &AffinePoint<C>) -> Self {
        let a = p.x().square();
        let b = p.y().square();
        let d = C::EDWARDS_A * a;
        let e = (p.x() + p.y()).square() - a - b;
        let g = d + b;
        let f = g - C::FieldElement::ONE.double();
        let h = d - b;
        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Tripling.
    pub fn triple(&self) -> Self {
        let (xe, yh, zf, zg) = triple_parts::<C>(&self.x, &self.y, &self.z);
        Self {
            x: xe * zf,
            y: yh * zg,
            z: zf * zg,
            t: xe * yh,
        }
    }

    /// Scale down to affine coordinates.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint::new_unchecked(self.x * zinv, self.y * zinv))
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Drop the `T` coordinate.
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    fn two_torsion() -> Self {
        Self {
            x: C::FieldElement::ZERO,
            y: -C::FieldElement::ONE,
            z: C::FieldElement::ONE,
            t: C::FieldElement::ZERO,
        }
    }

    /// Variable-time scalar multiplication by double-and-add, processing
    /// scalar bits from the most significant end.
    ///
    /// Runs in time dependent on the scalar; use [`ExtendedPoint::scalar_mul`]
    /// for secret scalars.
    pub fn mul_vartime(&self, k: &C::Scalar) -> Self {
        let repr = k.to_le_repr();
        let bytes = repr.as_ref();
        let mut acc = Self::IDENTITY;
        for i in (0..C::Scalar::BITS).rev() {
            acc = acc.double();
            if scalar::bit(bytes, i).into() {
                acc = acc.add(self);
            }
        }
        acc
    }
}

impl<C: MontgomeryParams> ExtendedPoint<C> {
    /// Constant-time scalar multiplication via the Montgomery ladder.
    ///
    /// The point is mapped to the birationally-equivalent Montgomery curve,
    /// multiplied x-only by a fixed-length ladder, and the result's
    /// y-coordinate is recovered by the Okeya–Sakurai method before mapping
    /// back. Exceptional points of the birational map (the identity and the
    /// 2-torsion point, on either side) are handled by constant-time
    /// selects, so the whole pipeline is branch-free in the scalar and the
    /// point.
    ///
    /// `pad` provides the ladder's working registers; allocate it once via
    /// [`Scratchpad::new`] and reuse it across calls.
    pub fn scalar_mul(&self, k: &C::Scalar, pad: &mut Scratchpad<C::FieldElement>) -> Self {
        let id_in = self.is_identity();
        let tt_in = self.x.is_zero() & self.y.ct_eq(&(-self.z));

        // The exceptional inputs of the Edwards → Montgomery map are
        // replaced by the generator; their true results are selected in at
        // the end.
        let p = Self::conditional_select(self, &Self::generator(), id_in | tt_in);

        let zinv = p
            .z
            .invert()
            .expect("Z is nonzero for valid extended points");
        let x = p.x * zinv;
        let y = p.y * zinv;

        // u = (1+y)/(1−y), v = u/x, sharing one inversion. After the
        // substitution above, x ≠ 0 and y ≠ 1.
        let m = ((C::FieldElement::ONE - y) * x)
            .invert()
            .expect("map denominator is nonzero off the exceptional set");
        let one_plus_y = C::FieldElement::ONE + y;
        let u = one_plus_y * x * m;
        let v = one_plus_y * m;

        let (p0, p1) = montgomery::ladder::<C>(&u, k, pad);
        let p0_inf = p0.is_infinity();
        let p1_inf = p1.is_infinity();
        let two_out = p0.u().is_zero() & !p0_inf;
        let r = montgomery::recover_y::<C>(&u, &v, &p0, &p1);

        // Montgomery (X : Y : Z) → Edwards (X(X+Z) : Y(X−Z) : Y(X+Z) : X(X−Z)).
        let sum = r.x() + r.z();
        let dif = r.x() - r.z();
        let mut out = Self {
            x: r.x() * sum,
            y: r.y() * dif,
            z: r.y() * sum,
            t: r.x() * dif,
        };

        // [k+1]P = ∞ means [k]P = −P, which the recovery formula cannot
        // represent; [k]P = ∞ or the 2-torsion point degenerate under the
        // map back. All three are fixed up here.
        out = Self::conditional_select(&out, &-p, p1_inf);
        out = Self::conditional_select(&out, &Self::two_torsion(), two_out);
        out = Self::conditional_select(&out, &Self::IDENTITY, p0_inf);

        // Results for the substituted inputs: k·identity is the identity;
        // k·(0,−1) alternates with the parity of k.
        let k_repr = k.to_le_repr();
        let k_odd = scalar::bit(k_repr.as_ref(), 0);
        let tt_res = Self::conditional_select(&Self::IDENTITY, &Self::two_torsion(), k_odd);
        out = Self::conditional_select(&out, &Self::IDENTITY, id_in);
        out = Self::conditional_select(&out, &tt_res, tt_in);
        out
    }
}

impl<C: EdwardsParams> ConditionallySelectable for ExtendedPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
            t: C::FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl<C: EdwardsParams> ConstantTimeEq for ExtendedPoint<C> {
    /// Affine equality by cross-multiplication.
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = (self.x * other.z).ct_eq(&(other.x * self.z));
        let y_eq = (self.y * other.z).ct_eq(&(other.y * self.z));
        x_eq & y_eq
    }
}

impl<C: EdwardsParams> PartialEq for ExtendedPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsParams> Eq for ExtendedPoint<C> {}

impl<C: EdwardsParams> Default for ExtendedPoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: EdwardsParams> DefaultIsZeroes for ExtendedPoint<C> {}

impl<C: EdwardsParams> Neg for ExtendedPoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }
}

impl<C: EdwardsParams> Neg for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn neg(self) -> ExtendedPoint<C> {
        -*self
    }
}

impl<C: EdwardsParams> Add<&ExtendedPoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn add(self, rhs: &ExtendedPoint<C>) -> ExtendedPoint<C> {
        ExtendedPoint::add(self, rhs)
    }
}

impl<C: EdwardsParams> Sub<&ExtendedPoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn sub(self, rhs: &ExtendedPoint<C>) -> ExtendedPoint<C> {
        ExtendedPoint::add(self, &-rhs)
    }
}

impl<C: EdwardsParams> Add<&AffinePoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn add(self, rhs: &AffinePoint<C>) -> ExtendedPoint<C> {
        self.add_mixed(rhs)
    }
}

impl<C: EdwardsParams> Sub<&AffinePoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn sub(self, rhs: &AffinePoint<C>) -> ExtendedPoint<C> {
        self.add_mixed(&-rhs)
    }
}

define_point_add_variants!(ExtendedPoint, crate::EdwardsParams);
define_point_sub_variants!(ExtendedPoint, crate::EdwardsParams);

impl<C: MontgomeryParams> Mul<&<C as EdwardsParams>::Scalar> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn mul(self, rhs: &<C as EdwardsParams>::Scalar) -> ExtendedPoint<C> {
        let mut pad = Scratchpad::new();
        self.scalar_mul(rhs, &mut pad)
    }
}

impl<C: EdwardsParams> From<ExtendedPoint<C>> for AffinePoint<C> {
    fn from(p: ExtendedPoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: EdwardsParams> From<ExtendedPoint<C>> for ProjectivePoint<C> {
    fn from(p: ExtendedPoint<C>) -> Self {
        p.to_projective()
    }
}
