//! Internal macros deriving the owned/borrowed operator combinations from
//! the canonical `&T op &T` impl each point module provides.

macro_rules! define_point_add_variants {
    ($point:ident, $bound:path) => {
        impl<C: $bound> ::core::ops::Add<&$point<C>> for $point<C> {
            type Output = $point<C>;

            fn add(self, rhs: &$point<C>) -> $point<C> {
                &self + rhs
            }
        }

        impl<C: $bound> ::core::ops::Add<$point<C>> for &$point<C> {
            type Output = $point<C>;

            fn add(self, rhs: $point<C>) -> $point<C> {
                self + &rhs
            }
        }

        impl<C: $bound> ::core::ops::Add<$point<C>> for $point<C> {
            type Output = $point<C>;

            fn add(self, rhs: $point<C>) -> $point<C> {
                &self + &rhs
            }
        }

        impl<C: $bound> ::core::ops::AddAssign<$point<C>> for $point<C> {
            fn add_assign(&mut self, rhs: $point<C>) {
                *self += &rhs;
            }
        }

        impl<C: $bound> ::core::ops::AddAssign<&$point<C>> for $point<C> {
            fn add_assign(&mut self, rhs: &$point<C>) {
                *self = &*self + rhs;
            }
        }
    };
}

macro_rules! define_point_sub_variants {
    ($point:ident, $bound:path) => {
        impl<C: $bound> ::core::ops::Sub<&$point<C>> for $point<C> {
            type Output = $point<C>;

            fn sub(self, rhs: &$point<C>) -> $point<C> {
                &self - rhs
            }
        }

        impl<C: $bound> ::core::ops::Sub<$point<C>> for &$point<C> {
            type Output = $point<C>;

            fn sub(self, rhs: $point<C>) -> $point<C> {
                self - &rhs
            }
        }

        impl<C: $bound> ::core::ops::Sub<$point<C>> for $point<C> {
            type Output = $point<C>;

            fn sub(self, rhs: $point<C>) -> $point<C> {
                &self - &rhs
            }
        }

        impl<C: $bound> ::core::ops::SubAssign<$point<C>> for $point<C> {
            fn sub_assign(&mut self, rhs: $point<C>) {
                *self -= &rhs;
            }
        }

        impl<C: $bound> ::core::ops::SubAssign<&$point<C>> for $point<C> {
            fn sub_assign(&mut self, rhs: &$point<C>) {
                *self = &*self - rhs;
            }
        }
    };
}

/// Derives the owned/borrowed scalar-multiplication operator combinations
/// for a concrete point and scalar type from the canonical
/// `Mul<&Scalar> for &Point` impl this crate provides.
///
/// Defined here rather than generically over curve parameters: blanket
/// impls for both `Scalar` and `&Scalar` operands over an associated type
/// would overlap.
#[macro_export]
macro_rules! impl_scalar_mul_variants {
    ($point:ty, $scalar:ty) => {
        impl ::core::ops::Mul<$scalar> for $point {
            type Output = $point;

            fn mul(self, rhs: $scalar) -> $point {
                &self * &rhs
            }
        }

        impl ::core::ops::Mul<$scalar> for &$point {
            type Output = $point;

            fn mul(self, rhs: $scalar) -> $point {
                self * &rhs
            }
        }

        impl ::core::ops::Mul<&$scalar> for $point {
            type Output = $point;

            fn mul(self, rhs: &$scalar) -> $point {
                &self * rhs
            }
        }

        impl ::core::ops::MulAssign<$scalar> for $point {
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = &*self * &rhs;
            }
        }

        impl ::core::ops::MulAssign<&$scalar> for $point {
            fn mul_assign(&mut self, rhs: &$scalar) {
                *self = &*self * rhs;
            }
        }
    };
}
