//! Reusable working storage for the ladder hot loop.

use crate::field::CurveField;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seven reusable field-element registers for the Montgomery ladder step
/// and y-recovery.
///
/// Callers allocate a scratchpad once and pass it into every scalar
/// multiplication, so the hot loop performs no allocation and leaves no
/// intermediate values behind: the registers are wiped on drop.
#[derive(Clone, Debug, Default)]
pub struct Scratchpad<F: CurveField> {
    pub(crate) r0: F,
    pub(crate) r1: F,
    pub(crate) r2: F,
    pub(crate) r3: F,
    pub(crate) r4: F,
    pub(crate) r5: F,
    pub(crate) r6: F,
}

impl<F: CurveField> Scratchpad<F> {
    /// Allocate a fresh scratchpad with all registers zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: CurveField> Zeroize for Scratchpad<F> {
    fn zeroize(&mut self) {
        self.r0.zeroize();
        self.r1.zeroize();
        self.r2.zeroize();
        self.r3.zeroize();
        self.r4.zeroize();
        self.r5.zeroize();
        self.r6.zeroize();
    }
}

impl<F: CurveField> Drop for Scratchpad<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: CurveField> ZeroizeOnDrop for Scratchpad<F> {}
