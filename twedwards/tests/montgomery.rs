//! Montgomery ladder and mapping suite for the development curve.

mod common;

twedwards::impl_montgomery_tests!(common::DevCurve, common::Scalar);
