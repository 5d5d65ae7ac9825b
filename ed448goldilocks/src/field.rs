//! Field arithmetic modulo the Goldilocks prime p = 2⁴⁴⁸ − 2²²⁴ − 1.

use primefield::bigint::U448;
use primefield::{
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};

/// Constant representing the modulus serialized as hex.
const MODULUS_HEX: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

primefield::monty_field_params! {
    name: FieldParams,
    modulus: MODULUS_HEX,
    uint: U448,
    byte_order: primefield::ByteOrder::LittleEndian,
    multiplicative_generator: 7,
    doc: "Montgomery parameters for the Goldilocks field modulus `p = 2⁴⁴⁸ − 2²²⁴ − 1`"
}

primefield::monty_field_element! {
    name: FieldElement,
    params: FieldParams,
    uint: U448,
    doc: "Element in the Ed448-Goldilocks base field modulo `p = 2⁴⁴⁸ − 2²²⁴ − 1`"
}

primefield::monty_field_arithmetic! {
    name: FieldElement,
    params: FieldParams,
    uint: U448
}

#[cfg(test)]
mod tests {
    use super::{FieldElement, U448};
    primefield::test_primefield!(FieldElement, U448);
}
