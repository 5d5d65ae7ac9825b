//! Scalar field arithmetic modulo the prime-order subgroup order
//! ℓ = 2²⁵² + 27742317777372353535851937790883648493.

use primefield::bigint::U256;
use primefield::{
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};
use twedwards::LadderScalar;

/// Constant representing the subgroup order serialized as hex.
const ORDER_HEX: &str = "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed";

primefield::monty_field_params! {
    name: ScalarParams,
    modulus: ORDER_HEX,
    uint: U256,
    byte_order: primefield::ByteOrder::LittleEndian,
    multiplicative_generator: 2,
    doc: "Montgomery parameters for Curve25519's scalar field modulo the subgroup order `ℓ`"
}

primefield::monty_field_element! {
    name: Scalar,
    params: ScalarParams,
    uint: U256,
    doc: "Element in the Curve25519 scalar field modulo the subgroup order `ℓ`"
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
