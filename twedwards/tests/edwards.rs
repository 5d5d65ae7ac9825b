//! Edwards group law suite for the development curve.

mod common;

twedwards::impl_edwards_tests!(common::DevCurve, common::Scalar);
