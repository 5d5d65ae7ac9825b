//! Development curve used by the integration suites.
//!
//! This is Curve1174 (`x² + y² = 1 − 1174x²y²` over `GF(2²⁵¹ − 9)`),
//! instantiated inline so the generic suites can run without pulling in a
//! downstream curve crate.

#![allow(dead_code)]

use twedwards::{DecafParams, EdwardsParams, LadderScalar, MontgomeryParams, PrimeField};

mod fp {
    use primefield::bigint::U256;
    use primefield::{
        ff::PrimeField,
        subtle::{Choice, ConstantTimeEq, CtOption},
    };

    primefield::monty_field_params! {
        name: FieldParams,
        modulus: "07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7",
        uint: U256,
        byte_order: primefield::ByteOrder::LittleEndian,
        multiplicative_generator: 7,
        doc: "Montgomery parameters for the development curve base field modulus p = 2²⁵¹ − 9."
    }

    primefield::monty_field_element! {
        name: FieldElement,
        params: FieldParams,
        uint: U256,
        doc: "Element of the development curve base field."
    }

    primefield::monty_field_arithmetic! {
        name: FieldElement,
        params: FieldParams,
        uint: U256
    }
}

mod fq {
    use primefield::bigint::U256;
    use primefield::{
        ff::PrimeField,
        subtle::{Choice, ConstantTimeEq, CtOption},
    };

    primefield::monty_field_params! {
        name: ScalarParams,
        modulus: "01fffffffffffffffffffffffffffffff77965c4dfd307348944d45fd166c971",
        uint: U256,
        byte_order: primefield::ByteOrder::LittleEndian,
        multiplicative_generator: 11,
        doc: "Montgomery parameters for the development curve scalar field."
    }

    primefield::monty_field_element! {
        name: Scalar,
        params: ScalarParams,
        uint: U256,
        doc: "Element of the development curve scalar field."
    }

    primefield::monty_field_arithmetic! {
        name: Scalar,
        params: ScalarParams,
        uint: U256
    }
}

pub use fp::FieldElement;
pub use fq::Scalar;

/// Parameter bundle for the development curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DevCurve;

impl EdwardsParams for DevCurve {
    type FieldElement = FieldElement;
    type Scalar = Scalar;

    const EDWARDS_A: FieldElement = FieldElement::ONE;
    const EDWARDS_D: FieldElement = FieldElement::from_u64(1174).neg();
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex_vartime(
            "da9ee2bc273f121665cd2e496ad921c090a129c0e7ae4393478c30ea0cbb7f03",
        ),
        FieldElement::from_hex_vartime(
            "0e36469bbfb1cca46b973fafe2dee24f0c0e846911845666ccb77fd4822fb706",
        ),
    );
    const COFACTOR: u32 = 4;
}

impl MontgomeryParams for DevCurve {
    // A = 2(a + d)/(a − d), B = 4/(a − d).
    const MONTGOMERY_A: FieldElement = {
        let inv = Self::EDWARDS_A.sub(&Self::EDWARDS_D).const_invert();
        Self::EDWARDS_A.add(&Self::EDWARDS_D).double().multiply(&inv)
    };
    const MONTGOMERY_B: FieldElement = {
        let inv = Self::EDWARDS_A.sub(&Self::EDWARDS_D).const_invert();
        FieldElement::from_u64(4).multiply(&inv)
    };
    const A_PLUS_TWO_OVER_FOUR: FieldElement = {
        let four_inv = FieldElement::from_u64(4).const_invert();
        Self::MONTGOMERY_A
            .add(&FieldElement::from_u64(2))
            .multiply(&four_inv)
    };
    const NONRESIDUE: FieldElement = FieldElement::from_u64(2).neg();
}

impl DecafParams for DevCurve {}

impl LadderScalar for Scalar {
    const BITS: u32 = <Scalar as PrimeField>::NUM_BITS;
    type Repr = <Scalar as PrimeField>::Repr;

    fn to_le_repr(&self) -> Self::Repr {
        self.to_repr()
    }
}

twedwards::impl_scalar_mul_variants!(twedwards::ExtendedPoint<DevCurve>, Scalar);
twedwards::impl_scalar_mul_variants!(twedwards::DecafPoint<DevCurve>, Scalar);
