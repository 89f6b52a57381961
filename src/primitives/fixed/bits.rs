//! Single-bit access and one-bit shifts for `Fixed`
//!
//! Bit `0` is the least significant bit of limb `0`. Bit `i` lives in limb
//! `i / L::BITS` at offset `i % L::BITS`.
//!
//! Shifts move the value by exactly one bit and never fail: the bit pushed
//! out of the top (left shift) or bottom (right shift) is discarded.

use crate::primitives::{Fixed, Limb};

impl<L: Limb, const N: usize> Fixed<L, N> {
    #[inline]
    fn locate(i: u32) -> (usize, u32) {
        assert!(i < Self::BITS, "bit index out of range");

        ((i / L::BITS) as usize, i % L::BITS)
    }

    /// Returns bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= BITS`.
    pub fn bit(&self, i: u32) -> bool {
        let (limb, offset) = Self::locate(i);

        (self.0[limb] >> offset) & L::ONE == L::ONE
    }

    /// Returns bit `i`, or `None` if `i >= BITS`.
    pub fn checked_bit(&self, i: u32) -> Option<bool> {
        (i < Self::BITS).then(|| self.bit(i))
    }

    /// Sets or clears bit `i` in place.
    ///
    /// # Panics
    /// Panics if `i >= BITS`.
    pub fn set_bit(&mut self, i: u32, value: bool) {
        let (limb, offset) = Self::locate(i);
        let mask = L::ONE << offset;

        if value {
            self.0[limb] = self.0[limb] | mask;
        } else {
            self.0[limb] = self.0[limb] & !mask;
        }
    }

    /// Shifts `a` left by one bit into `out`, leaving `a` untouched.
    pub fn shl1(a: &Self, out: &mut Self) {
        out.copy_from(a);
        out.shl1_assign();
    }

    /// Shifts `a` right by one bit into `out`, leaving `a` untouched.
    pub fn shr1(a: &Self, out: &mut Self) {
        out.copy_from(a);
        out.shr1_assign();
    }

    /// Shifts left by one bit in place.
    ///
    /// Walks the limbs from least to most significant so each limb's top
    /// bit is read before the limb is overwritten.
    pub fn shl1_assign(&mut self) {
        let mut carry = L::ZERO;

        for limb in self.0.iter_mut() {
            let next = *limb >> (L::BITS - 1);

            *limb = (*limb << 1) | carry;
            carry = next;
        }
    }

    /// Shifts right by one bit in place.
    ///
    /// Walks the limbs from most to least significant so each limb's low
    /// bit is read before the limb is overwritten.
    pub fn shr1_assign(&mut self) {
        let mut carry = L::ZERO;

        for limb in self.0.iter_mut().rev() {
            let next = (*limb & L::ONE) << (L::BITS - 1);

            *limb = (*limb >> 1) | carry;
            carry = next;
        }
    }
}
