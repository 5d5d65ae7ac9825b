//! Generic group-law, ladder and Decaf suites instantiated for Curve1174.

twedwards::impl_edwards_tests!(curve1174::Curve1174, curve1174::Scalar);
twedwards::impl_montgomery_tests!(curve1174::Curve1174, curve1174::Scalar);
twedwards::impl_decaf_tests!(curve1174::Curve1174, curve1174::Scalar);
