//! Projective Edwards points and the unified group law.
//!
//! Formulas are the BBJLP 2008 projective formulas for twisted Edwards
//! curves. Because `d` is a non-square they are complete: valid for every
//! input pair with no special cases for the identity or for doubling.

use crate::{AffinePoint, EdwardsParams, ExtendedPoint};
use core::ops::{Add, Neg, Sub};
use ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// A point on the curve in projective coordinates `(X : Y : Z)`, with
/// `x = X/Z` and `y = Y/Z`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: EdwardsParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C: EdwardsParams> ProjectivePoint<C> {
    /// The identity element `(0 : 1 : 1)`.
    pub const IDENTITY: Self = Self {
        x: <C::FieldElement as Field>::ZERO,
        y: <C::FieldElement as Field>::ONE,
        z: <C::FieldElement as Field>::ONE,
    };

    /// Base point of the prime-order subgroup.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: <C::FieldElement as Field>::ONE,
    };

    /// Lift an affine point to projective coordinates.
    pub fn from_affine(p: &AffinePoint<C>) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            z: C::FieldElement::ONE,
        }
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&self.z)
    }

    /// Unified addition.
    pub fn add(&self, other: &Self) -> Self {
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = C::EDWARDS_D * c * d;
        let f = b - e;
        let g = b + e;
        let x3 = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y3 = a * g * (d - C::EDWARDS_A * c);
        let z3 = f * g;
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition: `other` has `Z = 1`.
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        let a = self.z;
        let b = a.square();
        let c = self.x * other.x();
        let d = self.y * other.y();
        let e = C::EDWARDS_D * c * d;
        let f = b - e;
        let g = b + e;
        let x3 = a * f * ((self.x + self.y) * (other.x() + other.y()) - c - d);
        let y3 = a * g * (d - C::EDWARDS_A * c);
        let z3 = f * g;
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Addition of two affine points.
    pub fn add_affine(lhs: &AffinePoint<C>, rhs: &AffinePoint<C>) -> Self {
        let c = lhs.x() * rhs.x();
        let d = lhs.y() * rhs.y();
        let e = C::EDWARDS_D * c * d;
        let x3 = (C::FieldElement::ONE - e) * ((lhs.x() + lhs.y()) * (rhs.x() + rhs.y()) - c - d);
        let y3 = (C::FieldElement::ONE + e) * (d - C::EDWARDS_A * c);
        let z3 = C::FieldElement::ONE - e.square();
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Doubling.
    pub fn double(&self) -> Self {
        let b = (self.x + self.y).square();
        let c = self.x.square();
        let d = self.y.square();
        let e = C::EDWARDS_A * c;
        let f = e + d;
        let h = self.z.square();
        let j = f - h.double();
        let x3 = (b - c - d) * j;
        let y3 = f * (e - d);
        let z3 = f * j;
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Doubling of an affine point.
    pub fn double_affine(p: &AffinePoint<C>) -> Self {
        let b = (p.x() + p.y()).square();
        let c = p.x().square();
        let d = p.y().square();
        let e = C::EDWARDS_A * c;
        let f = e + d;
        let two = C::FieldElement::ONE.double();
        let x3 = (b - c - d) * (f - two);
        let y3 = f * (e - d);
        let z3 = f.square() - f.double();
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Tripling, cheaper than a double followed by an add.
    pub fn triple(&self) -> Self {
        let (xe, yh, zf, zg) = triple_parts::<C>(&self.x, &self.y, &self.z);
        Self {
            x: xe * zf,
            y: yh * zg,
            z: zf * zg,
        }
    }

    /// Scale down to affine coordinates.
    ///
    /// For complete curves `Z` is never zero on valid points, but the
    /// conversion still maps a zero denominator to the identity rather
    /// than panicking.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint::new_unchecked(self.x * zinv, self.y * zinv))
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Convert to extended coordinates. Costs three multiplications and a
    /// squaring to restore `T = XY/Z`.
    pub fn to_extended(&self) -> ExtendedPoint<C> {
        // (X : Y : Z) = (XZ : YZ : Z²), so T = XY.
        ExtendedPoint {
            x: self.x * self.z,
            y: self.y * self.z,
            z: self.z.square(),
            t: self.x * self.y,
        }
    }
}

/// Shared core of the tripling formula: returns `(xE, yH, zF, zG)` with
/// the projective result `(xE·zF : yH·zG : zF·zG)` and extended
/// `T = xE·yH`.
pub(crate) fn triple_parts<C: EdwardsParams>(
    x1: &C::FieldElement,
    y1: &C::FieldElement,
    z1: &C::FieldElement,
) -> (
    C::FieldElement,
    C::FieldElement,
    C::FieldElement,
    C::FieldElement,
) {
    let yy = y1.square();
    let axx = C::EDWARDS_A * x1.square();
    let ap = yy + axx;
    let b = (z1.square().double() - ap).double();
    let xb = axx * b;
    let yb = yy * b;
    let aa = ap * (yy - axx);
    let f = aa - yb;
    let g = aa + xb;
    let xe = *x1 * (yb + aa);
    let yh = *y1 * (xb - aa);
    let zf = *z1 * f;
    let zg = *z1 * g;
    (xe, yh, zf, zg)
}

impl<C: EdwardsParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: EdwardsParams> ConstantTimeEq for ProjectivePoint<C> {
    /// Compare two points for equality of the affine points they
    /// represent, by cross-multiplying to avoid inversions.
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = (self.x * other.z).ct_eq(&(other.x * self.z));
        let y_eq = (self.y * other.z).ct_eq(&(other.y * self.z));
        x_eq & y_eq
    }
}

impl<C: EdwardsParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsParams> Eq for ProjectivePoint<C> {}

impl<C: EdwardsParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: EdwardsParams> DefaultIsZeroes for ProjectivePoint<C> {}

impl<C: EdwardsParams> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl<C: EdwardsParams> Neg for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        -*self
    }
}

impl<C: EdwardsParams> Add<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, rhs)
    }
}

impl<C: EdwardsParams> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, &-rhs)
    }
}

impl<C: EdwardsParams> Add<&AffinePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, rhs: &AffinePoint<C>) -> ProjectivePoint<C> {
        self.add_mixed(rhs)
    }
}

impl<C: EdwardsParams> Sub<&AffinePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn sub(self, rhs: &AffinePoint<C>) -> ProjectivePoint<C> {
        self.add_mixed(&-rhs)
    }
}

define_point_add_variants!(ProjectivePoint, crate::EdwardsParams);
define_point_sub_variants!(ProjectivePoint, crate::EdwardsParams);

impl<C: EdwardsParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: EdwardsParams> From<ProjectivePoint<C>> for ExtendedPoint<C> {
    fn from(p: ProjectivePoint<C>) -> Self {
        p.to_extended()
    }
}
