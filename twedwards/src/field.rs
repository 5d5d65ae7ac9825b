//! Extension trait over [`ff::PrimeField`] for the field operations the
//! curve formulas consume.

use ff::PrimeField;
use subtle::Choice;
use zeroize::DefaultIsZeroes;

/// Field capabilities required by the point arithmetic in this crate.
///
/// Everything is derived from the `ff` traits; a blanket impl covers any
/// conforming [`PrimeField`] element (in particular the Montgomery-form
/// elements generated by `primefield`'s macros).
pub trait CurveField: PrimeField + DefaultIsZeroes {
    /// Whether this element is negative under the canonical sign
    /// convention: an element is negative when its least significant bit
    /// (in canonical form) is set, i.e. `x` is negative iff `x` is odd.
    fn is_negative(&self) -> Choice {
        self.is_odd()
    }

    /// The non-negative element among `self` and `-self`.
    fn abs(&self) -> Self {
        self.cneg(self.is_negative())
    }

    /// Negate in constant time when `choice` is set.
    fn cneg(&self, choice: Choice) -> Self {
        Self::conditional_select(self, &-*self, choice)
    }

    /// Whether this element is a square (zero counts as square).
    fn is_square(&self) -> Choice {
        Self::sqrt_ratio(self, &Self::ONE).0
    }

    /// Inverse square root: `(is_square(x), 1 / sqrt(x))`.
    ///
    /// For zero input the result is `(false, 0)`; call sites that treat
    /// zero as valid must account for it separately.
    fn inv_sqrt(&self) -> (Choice, Self) {
        Self::sqrt_ratio(&Self::ONE, self)
    }

    /// Multiplicative inverse, or zero for zero input.
    fn invert_or_zero(&self) -> Self {
        self.invert().unwrap_or(Self::ZERO)
    }
}

impl<F: PrimeField + DefaultIsZeroes> CurveField for F {}
