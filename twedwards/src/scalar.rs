//! Scalar contract for the constant-time multiplication routines.

use subtle::Choice;

/// A scalar the Montgomery ladder can consume.
///
/// The ladder runs exactly [`BITS`][`LadderScalar::BITS`] steps regardless
/// of the scalar's value, reading bits from a little-endian byte
/// representation. Implementations are expected to be canonical residues
/// modulo the group order, so `BITS` is the bit length of the order.
pub trait LadderScalar: Copy {
    /// Fixed bit length processed by the ladder.
    const BITS: u32;

    /// Little-endian byte representation type.
    type Repr: AsRef<[u8]>;

    /// Canonical little-endian bytes of the scalar.
    fn to_le_repr(&self) -> Self::Repr;
}

/// Extract bit `index` (LSB-first) of a little-endian byte string as a
/// [`Choice`].
pub(crate) fn bit(bytes: &[u8], index: u32) -> Choice {
    let byte = bytes[(index / 8) as usize];
    Choice::from((byte >> (index % 8)) & 1)
}
