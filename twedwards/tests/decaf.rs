//! Decaf compression suite for the development curve.

mod common;

twedwards::impl_decaf_tests!(common::DevCurve, common::Scalar);
