//! Generic group-law and ladder suites instantiated for Curve25519.

twedwards::impl_edwards_tests!(curve25519::Curve25519, curve25519::Scalar);
twedwards::impl_montgomery_tests!(curve25519::Curve25519, curve25519::Scalar);
