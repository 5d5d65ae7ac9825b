//! Scalar field arithmetic modulo the prime-order subgroup order
//! q = 2²⁴⁹ − 11332719920821432534773113288178349711.

use primefield::bigint::U256;
use primefield::{
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};
use twedwards::LadderScalar;

/// Constant representing the subgroup order serialized as hex.
const ORDER_HEX: &str = "01fffffffffffffffffffffffffffffff77965c4dfd307348944d45fd166c971";

primefield::monty_field_params! {
    name: ScalarParams,
    modulus: ORDER_HEX,
    uint: U256,
    byte_order: primefield::ByteOrder::LittleEndian,
    multiplicative_generator: 11,
    doc: "Montgomery parameters for Curve1174's scalar field modulo the subgroup order `q`"
}

primefield::monty_field_element! {
    name: Scalar,
    params: ScalarParams,
    uint: U256,
    doc: "Element in the Curve1174 scalar field modulo the subgroup order `q`"
}

primefield::monty_field_arithmetic! {
    name: Scalar,
    params: ScalarParams,
    uint: U256
}

impl LadderScalar for Scalar {
    const BITS: u32 = <Scalar as PrimeField>::NUM_BITS;
    type Repr = <Scalar as PrimeField>::Repr;

    fn to_le_repr(&self) -> Self::Repr {
        self.to_repr()
    }
}

#[cfg(test)]
mod tests {
    use super::{Scalar, U256};
    primefield::test_primefield!(Scalar, U256);
}
