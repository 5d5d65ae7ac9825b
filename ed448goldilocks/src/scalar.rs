//! Scalar field arithmetic modulo the prime-order subgroup order
//! L = 2⁴⁴⁶ − 13818066809895115352007386748515426880336692474882178609894547503885.

use primefield::bigint::U448;
use primefield::{
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};
use twedwards::LadderScalar;

/// Constant representing the subgroup order serialized as hex.
const ORDER_HEX: &str = "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3";

primefield::monty_field_params! {
    name: ScalarParams,
    modulus: ORDER_HEX,
    uint: U448,
    byte_order: primefield::ByteOrder::LittleEndian,
    multiplicative_generator: 2,
    doc: "Montgomery parameters for Ed448-Goldilocks' scalar field modulo the subgroup order `L`"
}

primefield::monty_field_element! {
    name: Scalar,
    params: ScalarParams,
    uint: U448,
    doc: "Element in the Ed448-Goldilocks scalar field modulo the subgroup order `L`"
}

primefield::monty_field_arithmetic! {
    name: Scalar,
    params: ScalarParams,
    uint: U448
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
    use super::{Scalar, U448};
    primefield::test_primefield!(Scalar, U448);
}
