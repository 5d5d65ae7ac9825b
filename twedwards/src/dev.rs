//! Shared test suites for curve instantiations.
//!
//! Each macro expands to a module of tests exercising one layer of the
//! engine against a concrete curve. Curve crates (and this crate's own
//! integration tests, against a development curve) invoke them with the
//! curve marker type and its scalar type; `proptest` must be a
//! dev-dependency of the invoking crate.

/// Group-law and scalar-multiplication tests for an [`EdwardsParams`]
/// bundle with Montgomery constants.
///
/// [`EdwardsParams`]: crate::EdwardsParams
#[macro_export]
macro_rules! impl_edwards_tests {
    ($curve:ty, $scalar:ty) => {
        mod edwards_suite {
            use super::*;
            use ::proptest::prelude::*;
            use $crate::Field as _;
            use $crate::subtle::ConstantTimeEq;
            use $crate::{AffinePoint, ExtendedPoint, ProjectivePoint, Scratchpad};

            /// Fold four words into a scalar, spreading proptest inputs
            /// over the whole scalar field.
            fn scalar_from_words(words: [u64; 4]) -> $scalar {
                let shift = <$scalar>::from(1u64 << 32).square();
                words
                    .iter()
                    .rev()
                    .fold(<$scalar as $crate::Field>::ZERO, |acc, w| {
                        acc * shift + <$scalar>::from(*w)
                    })
            }

            #[test]
            fn generator_is_valid() {
                assert!(bool::from(ExtendedPoint::<$curve>::generator().is_valid()));
                let g = AffinePoint::<$curve>::GENERATOR;
                assert!(bool::from(
                    AffinePoint::<$curve>::try_from_coords(g.x(), g.y()).is_some()
                ));
            }

            #[test]
            fn identity_laws() {
                let g = ExtendedPoint::<$curve>::generator();
                let id = ExtendedPoint::<$curve>::IDENTITY;
                assert_eq!(g.add(&id), g);
                assert_eq!(id.add(&g), g);
                assert_eq!(g.add(&-g), id);
                assert!(bool::from(id.is_identity()));
            }

            #[test]
            fn small_scalars() {
                let mut pad = Scratchpad::new();
                let g = ExtendedPoint::<$curve>::generator();
                let zero = <$scalar as $crate::Field>::ZERO;
                let one = <$scalar as $crate::Field>::ONE;
                assert!(bool::from(g.scalar_mul(&zero, &mut pad).is_identity()));
                assert_eq!(g.scalar_mul(&one, &mut pad), g);
                assert_eq!(g.scalar_mul(&one.double(), &mut pad), g.double());
                assert_eq!(g.mul_vartime(&zero), ExtendedPoint::<$curve>::IDENTITY);
                assert_eq!(g.mul_vartime(&(one.double() + one)), g.triple());
            }

            #[test]
            fn scalar_mul_of_identity_and_two_torsion() {
                let mut pad = Scratchpad::new();
                let id = ExtendedPoint::<$curve>::IDENTITY;
                let tt = ExtendedPoint::<$curve>::from_affine(&AffinePoint::two_torsion());
                let k = <$scalar>::from(5u64);
                let k2 = <$scalar>::from(6u64);
                assert!(bool::from(id.scalar_mul(&k, &mut pad).is_identity()));
                assert_eq!(tt.scalar_mul(&k, &mut pad), tt);
                assert!(bool::from(tt.scalar_mul(&k2, &mut pad).is_identity()));
            }

            #[test]
            fn negative_one_times_generator() {
                let mut pad = Scratchpad::new();
                let g = ExtendedPoint::<$curve>::generator();
                let minus_one = -<$scalar as $crate::Field>::ONE;
                assert_eq!(g.scalar_mul(&minus_one, &mut pad), -g);
            }

            #[test]
            fn scalar_mul_operator_forms_agree() {
                let g = ExtendedPoint::<$curve>::generator();
                let k = <$scalar>::from(5u64);
                let expected = g.mul_vartime(&k);
                assert_eq!(&g * &k, expected);
                assert_eq!(&g * k, expected);
                assert_eq!(g * &k, expected);
                assert_eq!(g * k, expected);
                let mut p = g;
                p *= &k;
                assert_eq!(p, expected);
                p = g;
                p *= k;
                assert_eq!(p, expected);
            }

            #[test]
            fn compress_roundtrip() {
                let g = AffinePoint::<$curve>::GENERATOR;
                let (sign, y) = g.compress();
                let back = AffinePoint::<$curve>::decompress(&y, sign).unwrap();
                assert_eq!(back, g);
            }

            proptest! {
                #[test]
                fn group_laws(aw in any::<[u64; 4]>(), bw in any::<[u64; 4]>()) {
                    let g = ExtendedPoint::<$curve>::generator();
                    let p = g.mul_vartime(&scalar_from_words(aw));
                    let q = g.mul_vartime(&scalar_from_words(bw));
                    prop_assert!(bool::from(p.is_valid()));
                    prop_assert_eq!(p.add(&q), q.add(&p));
                    prop_assert_eq!(p.add(&q).add(&g), p.add(&q.add(&g)));
                    prop_assert_eq!(p.add(&p), p.double());
                    prop_assert_eq!(p.double().add(&p), p.triple());
                    prop_assert!(bool::from((p - p).is_identity()));
                }

                #[test]
                fn mixed_variants_agree(aw in any::<[u64; 4]>(), bw in any::<[u64; 4]>()) {
                    let g = ExtendedPoint::<$curve>::generator();
                    let p = g.mul_vartime(&scalar_from_words(aw));
                    let q = g.mul_vartime(&scalar_from_words(bw)).to_affine();
                    prop_assert_eq!(p.add_mixed(&q), p.add(&q.to_extended()));
                    let pa = p.to_affine();
                    prop_assert_eq!(
                        ExtendedPoint::<$curve>::add_affine(&pa, &q).to_affine(),
                        p.add_mixed(&q).to_affine()
                    );
                    prop_assert_eq!(
                        ExtendedPoint::<$curve>::double_affine(&pa).to_affine(),
                        p.double().to_affine()
                    );

                    let pp = p.to_projective();
                    let qp = q.to_projective();
                    prop_assert_eq!(pp.add(&qp), pp.add_mixed(&q));
                    prop_assert_eq!(
                        ProjectivePoint::<$curve>::add_affine(&pa, &q).to_affine(),
                        pp.add_mixed(&q).to_affine()
                    );
                    prop_assert_eq!(pp.double().to_affine(), p.double().to_affine());
                    prop_assert_eq!(
                        ProjectivePoint::<$curve>::double_affine(&pa).to_affine(),
                        p.double().to_affine()
                    );
                    prop_assert_eq!(pp.triple().to_affine(), p.triple().to_affine());
                    prop_assert_eq!(pp.to_extended(), p);
                }

                #[test]
                fn ladder_matches_double_and_add(
                    aw in any::<[u64; 4]>(),
                    kw in any::<[u64; 4]>(),
                ) {
                    let mut pad = Scratchpad::new();
                    let g = ExtendedPoint::<$curve>::generator();
                    let p = g.mul_vartime(&scalar_from_words(aw));
                    let k = scalar_from_words(kw);
                    prop_assert_eq!(p.scalar_mul(&k, &mut pad), p.mul_vartime(&k));
                }

                #[test]
                fn scalar_distributivity(aw in any::<[u64; 4]>(), bw in any::<[u64; 4]>()) {
                    let mut pad = Scratchpad::new();
                    let g = ExtendedPoint::<$curve>::generator();
                    let a = scalar_from_words(aw);
                    let b = scalar_from_words(bw);
                    let lhs = g.scalar_mul(&(a + b), &mut pad);
                    let rhs = g.scalar_mul(&a, &mut pad).add(&g.scalar_mul(&b, &mut pad));
                    prop_assert_eq!(lhs, rhs);
                }

                #[test]
                fn decompress_roundtrip(aw in any::<[u64; 4]>()) {
                    let g = ExtendedPoint::<$curve>::generator();
                    let p = g.mul_vartime(&scalar_from_words(aw)).to_affine();
                    let (sign, y) = p.compress();
                    let back = AffinePoint::<$curve>::decompress(&y, sign).unwrap();
                    prop_assert_eq!(back, p);
                    prop_assert!(bool::from(
                        back.to_extended().ct_eq(&p.to_extended())
                    ));
                }
            }
        }
    };
}

/// Montgomery-ladder and Elligator tests for a [`MontgomeryParams`]
/// bundle.
///
/// [`MontgomeryParams`]: crate::MontgomeryParams
#[macro_export]
macro_rules! impl_montgomery_tests {
    ($curve:ty, $scalar:ty) => {
        mod montgomery_suite {
            use super::*;
            use ::proptest::prelude::*;
            use $crate::Field as _;
            use $crate::{ExtendedPoint, MontgomeryXPoint, Scratchpad, map_to_subgroup, mul_x};

            fn scalar_from_words(words: [u64; 4]) -> $scalar {
                let shift = <$scalar>::from(1u64 << 32).square();
                words
                    .iter()
                    .rev()
                    .fold(<$scalar as $crate::Field>::ZERO, |acc, w| {
                        acc * shift + <$scalar>::from(*w)
                    })
            }

            fn field_from_words(
                words: [u64; 8],
            ) -> <$curve as $crate::EdwardsParams>::FieldElement {
                type Fe = <$curve as $crate::EdwardsParams>::FieldElement;
                let shift = <Fe>::from(1u64 << 32).square();
                words.iter().rev().fold(<Fe as $crate::Field>::ZERO, |acc, w| {
                    acc * shift + <Fe>::from(*w)
                })
            }

            fn generator_u() -> <$curve as $crate::EdwardsParams>::FieldElement {
                MontgomeryXPoint::<$curve>::from_edwards(&ExtendedPoint::generator())
                    .to_affine_u()
            }

            #[test]
            fn zero_scalar_gives_infinity() {
                let mut pad = Scratchpad::new();
                let zero = <$scalar as $crate::Field>::ZERO;
                let out = mul_x::<$curve>(&generator_u(), &zero, &mut pad);
                assert!(bool::from($crate::Field::is_zero(&out)));
            }

            proptest! {
                #[test]
                fn ladder_agrees_with_edwards(kw in any::<[u64; 4]>()) {
                    let mut pad = Scratchpad::new();
                    let k = scalar_from_words(kw);
                    let via_edwards = MontgomeryXPoint::<$curve>::from_edwards(
                        &ExtendedPoint::generator().scalar_mul(&k, &mut pad),
                    )
                    .to_affine_u();
                    let via_ladder = mul_x::<$curve>(&generator_u(), &k, &mut pad);
                    prop_assert_eq!(via_ladder, via_edwards);
                }

                #[test]
                fn diffie_hellman_agreement(aw in any::<[u64; 4]>(), bw in any::<[u64; 4]>()) {
                    let mut pad = Scratchpad::new();
                    let a = scalar_from_words(aw);
                    let b = scalar_from_words(bw);
                    let gu = generator_u();
                    let pa = mul_x::<$curve>(&gu, &a, &mut pad);
                    let pb = mul_x::<$curve>(&gu, &b, &mut pad);
                    let shared_a = mul_x::<$curve>(&pb, &a, &mut pad);
                    let shared_b = mul_x::<$curve>(&pa, &b, &mut pad);
                    prop_assert_eq!(shared_a, shared_b);
                }

                #[test]
                fn elligator_lands_in_subgroup(rw in any::<[u64; 8]>()) {
                    let p = map_to_subgroup::<$curve>(&field_from_words(rw));
                    prop_assert!(bool::from(p.is_valid()));
                    // [q−1]P = −P exactly when P lies in the prime-order
                    // subgroup.
                    let minus_one = -<$scalar as $crate::Field>::ONE;
                    prop_assert_eq!(p.mul_vartime(&minus_one), -p);
                }
            }
        }
    };
}

/// Decaf compression tests for a [`DecafParams`] bundle.
///
/// [`DecafParams`]: crate::DecafParams
#[macro_export]
macro_rules! impl_decaf_tests {
    ($curve:ty, $scalar:ty) => {
        mod decaf_suite {
            use super::*;
            use ::proptest::prelude::*;
            use $crate::Field as _;
            use $crate::subtle::ConstantTimeEq;
            use $crate::{AffinePoint, CompressedDecaf, DecafPoint, ExtendedPoint};

            fn scalar_from_words(words: [u64; 4]) -> $scalar {
                let shift = <$scalar>::from(1u64 << 32).square();
                words
                    .iter()
                    .rev()
                    .fold(<$scalar as $crate::Field>::ZERO, |acc, w| {
                        acc * shift + <$scalar>::from(*w)
                    })
            }

            #[test]
            fn identity_encodes_to_zeros() {
                let enc = DecafPoint::<$curve>::IDENTITY.compress();
                assert!(enc.as_bytes().iter().all(|&b| b == 0));
                let back = CompressedDecaf::<$curve>::identity().decompress().unwrap();
                assert!(bool::from(back.is_identity()));
            }

            #[test]
            fn negative_s_is_rejected() {
                // 1 is odd, hence negative under the sign convention.
                let mut repr = <CompressedDecaf<$curve>>::identity();
                repr.0[0] = 1;
                assert!(bool::from(repr.decompress().is_none()));
            }

            #[test]
            fn compressed_debug_formats_bytes() {
                let s = ::std::format!("{:?}", CompressedDecaf::<$curve>::identity());
                assert!(s.starts_with("CompressedDecaf"));
                assert!(s.contains('0'));
            }

            proptest! {
                #[test]
                fn compress_roundtrip(kw in any::<[u64; 4]>()) {
                    let k = scalar_from_words(kw);
                    let p = DecafPoint::<$curve>::try_from_point(
                        &ExtendedPoint::generator().mul_vartime(&k),
                    )
                    .unwrap();
                    let enc = p.compress();
                    let back = enc.decompress().unwrap();
                    prop_assert_eq!(back, p);
                    prop_assert_eq!(back.compress(), enc);
                }

                #[test]
                fn torsion_translate_encodes_identically(kw in any::<[u64; 4]>()) {
                    let k = scalar_from_words(kw);
                    let rep = ExtendedPoint::<$curve>::generator().mul_vartime(&k);
                    let translate = rep.add(
                        &ExtendedPoint::from_affine(&AffinePoint::two_torsion()),
                    );
                    let p = DecafPoint::<$curve>::try_from_point(&rep).unwrap();
                    let q = DecafPoint::<$curve>::try_from_point(&translate).unwrap();
                    prop_assert_eq!(p.compress(), q.compress());
                    prop_assert!(bool::from(p.ct_eq(&q)));
                }

                #[test]
                fn linearity(aw in any::<[u64; 4]>(), bw in any::<[u64; 4]>()) {
                    let a = scalar_from_words(aw);
                    let b = scalar_from_words(bw);
                    let g = DecafPoint::<$curve>::generator();
                    prop_assert_eq!(g * (a + b), g * a + g * b);
                    prop_assert_eq!((g * a).compress(), (g * a + DecafPoint::IDENTITY).compress());
                }
            }
        }
    };
}
