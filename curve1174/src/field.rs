//! Field arithmetic modulo p = 2²⁵¹ − 9.

use primefield::bigint::U256;
use primefield::{
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};

/// Constant representing the modulus serialized as hex.
const MODULUS_HEX: &str = "07fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7";

primefield::monty_field_params! {
    name: FieldParams,
    modulus: MODULUS_HEX,
    uint: U256,
    byte_order: primefield::ByteOrder::LittleEndian,
    multiplicative_generator: 7,
    doc: "Montgomery parameters for Curve1174's field modulus `p = 2²⁵¹ − 9`"
}

primefield::monty_field_element! {
    name: FieldElement,
    params: FieldParams,
    uint: U256,
    doc: "Element in the Curve1174 base field modulo `p = 2²⁵¹ − 9`"
}

primefield::monty_field_arithmetic! {
    name: FieldElement,
    params: FieldParams,
    uint: U256
}

#[cfg(test)]
mod tests {
    use super::{FieldElement, U256};
    primefield::test_primefield!(FieldElement, U256);
}
