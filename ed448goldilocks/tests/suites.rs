//! Generic group-law, ladder and Decaf suites instantiated for
//! Ed448-Goldilocks.

twedwards::impl_edwards_tests!(ed448goldilocks::Ed448Goldilocks, ed448goldilocks::Scalar);
twedwards::impl_montgomery_tests!(ed448goldilocks::Ed448Goldilocks, ed448goldilocks::Scalar);
twedwards::impl_decaf_tests!(ed448goldilocks::Ed448Goldilocks, ed448goldilocks::Scalar);
