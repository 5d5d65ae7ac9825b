//! Affine Edwards points.

use crate::{CurveField, EdwardsParams, ExtendedPoint, ProjectivePoint};
use core::ops::Neg;
use ff::{Field, PrimeField};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// A point on the curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: EdwardsParams> {
    x: C::FieldElement,
    y: C::FieldElement,
}

impl<C: EdwardsParams> AffinePoint<C> {
    /// The identity element `(0, 1)`.
    pub const IDENTITY: Self = Self {
        x: <C::FieldElement as Field>::ZERO,
        y: <C::FieldElement as Field>::ONE,
    };

    /// Base point of the prime-order subgroup.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
    };

    /// Construct from coordinates known to satisfy the curve equation.
    pub(crate) fn new_unchecked(x: C::FieldElement, y: C::FieldElement) -> Self {
        Self { x, y }
    }

    /// The 2-torsion point `(0, −1)`.
    pub fn two_torsion() -> Self {
        Self {
            x: C::FieldElement::ZERO,
            y: -C::FieldElement::ONE,
        }
    }

    /// x-coordinate.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// y-coordinate.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&C::FieldElement::ONE)
    }

    /// Construct a point from affine coordinates, validating the curve
    /// equation `a·x² + y² = 1 + d·x²·y²`.
    pub fn try_from_coords(x: C::FieldElement, y: C::FieldElement) -> CtOption<Self> {
        let xx = x.square();
        let yy = y.square();
        let lhs = C::EDWARDS_A * xx + yy;
        let rhs = C::FieldElement::ONE + C::EDWARDS_D * xx * yy;
        CtOption::new(Self { x, y }, lhs.ct_eq(&rhs))
    }

    /// Decompress a point from its y-coordinate encoding and the sign of x.
    ///
    /// Fails if the bytes are a non-canonical field encoding, if `y` is not
    /// the y-coordinate of any curve point, or if `x_is_negative` is set
    /// while the recovered x-coordinate is zero.
    pub fn decompress(
        y_repr: &<C::FieldElement as PrimeField>::Repr,
        x_is_negative: Choice,
    ) -> CtOption<Self> {
        C::FieldElement::from_repr(*y_repr).and_then(|y| {
            // x² = (1 − y²) / (a − d·y²)
            let yy = y.square();
            let num = C::FieldElement::ONE - yy;
            let div = C::EDWARDS_A - C::EDWARDS_D * yy;
            let (is_square, root) = C::FieldElement::sqrt_ratio(&num, &div);
            let x = root.abs().cneg(x_is_negative);
            let sign_ok = !(x_is_negative & x.is_zero());
            CtOption::new(Self { x, y }, is_square & sign_ok)
        })
    }

    /// The sign of x together with the canonical bytes of y, sufficient to
    /// reconstruct the point via [`AffinePoint::decompress`].
    pub fn compress(&self) -> (Choice, <C::FieldElement as PrimeField>::Repr) {
        (self.x.is_negative(), self.y.to_repr())
    }

    /// Convert to projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        ProjectivePoint::from_affine(self)
    }

    /// Convert to extended coordinates.
    pub fn to_extended(&self) -> ExtendedPoint<C> {
        ExtendedPoint::from_affine(self)
    }
}

impl<C: EdwardsParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<C: EdwardsParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl<C: EdwardsParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsParams> Eq for AffinePoint<C> {}

impl<C: EdwardsParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: EdwardsParams> DefaultIsZeroes for AffinePoint<C> {}

impl<C: EdwardsParams> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }
}

impl<C: EdwardsParams> Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -*self
    }
}

impl<C: EdwardsParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        p.to_projective()
    }
}

impl<C: EdwardsParams> From<AffinePoint<C>> for ExtendedPoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        p.to_extended()
    }
}
