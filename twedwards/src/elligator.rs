//! Elligator 2: mapping field elements to points on the prime-order
//! subgroup.

use crate::{AffinePoint, CurveField, ExtendedPoint, MontgomeryParams};
use ff::Field;
use subtle::ConditionallySelectable;

/// Map a field element to the prime-order subgroup.
///
/// Applies Elligator 2 on the Montgomery form using the curve's fixed
/// non-residue, converts to the Edwards form, and clears the cofactor by
/// doubling. The map is deterministic and constant-time; feeding it a
/// hash-derived field element gives hash-to-point behavior. Roughly half
/// of all field elements map to each candidate x-coordinate branch.
pub fn map_to_subgroup<C: MontgomeryParams>(r: &C::FieldElement) -> ExtendedPoint<C> {
    let (u, v) = elligator2::<C>(r);
    let mut point = montgomery_to_edwards::<C>(&u, &v).to_extended();
    for _ in 0..C::COFACTOR.trailing_zeros() {
        point = point.double();
    }
    point
}

/// The Elligator 2 map onto the Montgomery curve, returning affine
/// `(u, v)`.
fn elligator2<C: MontgomeryParams>(r: &C::FieldElement) -> (C::FieldElement, C::FieldElement) {
    let one = C::FieldElement::ONE;
    let b_inv = C::MONTGOMERY_B.invert_or_zero();

    let mut t = C::NONRESIDUE * r.square();
    // r with n·r² = −1 would zero the denominator; those map from t = 0.
    t = C::FieldElement::conditional_select(&t, &C::FieldElement::ZERO, (one + t).is_zero());
    let x1 = -C::MONTGOMERY_A * (one + t).invert_or_zero();
    let gx1 = (x1.square() * x1 + C::MONTGOMERY_A * x1.square() + x1) * b_inv;
    let x2 = -x1 - C::MONTGOMERY_A;
    let gx2 = (x2.square() * x2 + C::MONTGOMERY_A * x2.square() + x2) * b_inv;

    // Exactly one of gx1, gx2 is a square (both, when gx1 = 0).
    let e = gx1.is_square();
    let x = C::FieldElement::conditional_select(&x2, &x1, e);
    let gx = C::FieldElement::conditional_select(&gx2, &gx1, e);
    let y = gx
        .sqrt()
        .unwrap_or(C::FieldElement::ZERO)
        .abs()
        .cneg(!e);
    (x, y)
}

/// Convert an affine Montgomery point to the Edwards form, sending the
/// exceptional points of the birational map to the small-order elements
/// they correspond to.
fn montgomery_to_edwards<C: MontgomeryParams>(
    u: &C::FieldElement,
    v: &C::FieldElement,
) -> AffinePoint<C> {
    let one = C::FieldElement::ONE;
    let v_zero = v.is_zero();
    let u_plus_one = *u + one;
    let exceptional = v_zero | u_plus_one.is_zero();

    let x = *u * v.invert_or_zero();
    let y = (*u - one) * u_plus_one.invert_or_zero();

    let mut point = AffinePoint::new_unchecked(x, y);
    point = AffinePoint::conditional_select(&point, &AffinePoint::IDENTITY, exceptional);
    // (0, 0) is the Montgomery image of the Edwards 2-torsion point.
    AffinePoint::conditional_select(
        &point,
        &AffinePoint::two_torsion(),
        v_zero & u.is_zero(),
    )
}
