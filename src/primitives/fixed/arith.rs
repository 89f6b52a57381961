//! Addition, subtraction and multiplication for `Fixed`
//!
//! Each operation exists in a reporting form (returning `Result`) and, where
//! the wrap-around is a legitimate outcome, an `overflowing_*` form that
//! returns the carry or borrow out of the top limb as a `bool`. In every
//! form `out` holds the low `BITS` bits of the exact result, so callers must
//! not trust it once an error has been returned.

use crate::error::{Error, Result};
use crate::primitives::{Fixed, Limb, Underflow};

impl<L: Limb, const N: usize> Fixed<L, N> {
    /// Computes `out = a + b mod 2^BITS` and returns whether a carry left
    /// the top limb.
    pub fn overflowing_add(a: &Self, b: &Self, out: &mut Self) -> bool {
        let mut carry = L::Wide::default();

        for ((&l, &r), o) in a.0.iter().zip(b.0.iter()).zip(out.0.iter_mut()) {
            let (sum, next) = l.add_carry(r, carry);

            *o = sum;
            carry = next;
        }

        carry != L::Wide::default()
    }

    /// Computes `out = a + b`.
    ///
    /// # Errors
    /// `Error::Overflow` if the sum needs more than `BITS` bits. `out` then
    /// holds the truncated sum.
    pub fn add(a: &Self, b: &Self, out: &mut Self) -> Result<()> {
        if Self::overflowing_add(a, b, out) {
            tracing::trace!(op = "add", bits = Self::BITS, "overflow");
            return Err(Error::Overflow);
        }

        Ok(())
    }

    /// Computes `out = a - b mod 2^BITS` and returns whether a borrow left
    /// the top limb, i.e. whether `a < b`.
    pub fn overflowing_sub(a: &Self, b: &Self, out: &mut Self) -> bool {
        let mut borrow = L::SignedWide::default();

        for ((&l, &r), o) in a.0.iter().zip(b.0.iter()).zip(out.0.iter_mut()) {
            let (diff, next) = l.sub_borrow(r, borrow);

            *o = diff;
            borrow = next;
        }

        borrow != L::SignedWide::default()
    }

    /// Computes `out = a - b` under the build's default policy,
    /// `Underflow::DEFAULT`.
    pub fn subtract(a: &Self, b: &Self, out: &mut Self) -> Result<()> {
        Self::subtract_with(a, b, out, Underflow::DEFAULT)
    }

    /// Computes `out = a - b` under an explicit underflow policy.
    ///
    /// `out` holds `a - b mod 2^BITS` in both modes.
    ///
    /// # Errors
    /// `Error::NegativeResult` if `a < b` and `policy` is `Underflow::Trap`.
    pub fn subtract_with(a: &Self, b: &Self, out: &mut Self, policy: Underflow) -> Result<()> {
        let negative = Self::overflowing_sub(a, b, out);

        if negative && policy == Underflow::Trap {
            tracing::trace!(op = "subtract", bits = Self::BITS, "negative result");
            return Err(Error::NegativeResult);
        }

        Ok(())
    }

    /// Computes `out = a * b mod 2^BITS` by shift-and-add.
    ///
    /// Products wider than `BITS` are truncated; use `checked_multiply` to
    /// have them reported instead. Runs at most `BITS` rounds and stops as
    /// soon as the shifted copy of `a` runs out of set bits.
    pub fn multiply(a: &Self, b: &Self, out: &mut Self) -> Result<()> {
        Self::shift_and_add(a, b, out, false)
    }

    /// Computes `out = a * b`.
    ///
    /// # Errors
    /// `Error::Overflow` if the product needs more than `BITS` bits. `out`
    /// then holds a partial product.
    pub fn checked_multiply(a: &Self, b: &Self, out: &mut Self) -> Result<()> {
        Self::shift_and_add(a, b, out, true)
    }

    fn shift_and_add(a: &Self, b: &Self, out: &mut Self, checked: bool) -> Result<()> {
        let mut x = *a;
        let mut y = *b;

        out.clear();

        while !x.is_zero() {
            if x.bit(0) {
                let acc = *out;

                if Self::overflowing_add(&acc, &y, out) && checked {
                    tracing::trace!(op = "multiply", bits = Self::BITS, "overflow");
                    return Err(Error::Overflow);
                }
            }

            x.shr1_assign();

            // a set bit of y falling off the top only matters if x has
            // more bits left to multiply it by
            if checked && !x.is_zero() && y.bit(Self::BITS - 1) {
                tracing::trace!(op = "multiply", bits = Self::BITS, "overflow");
                return Err(Error::Overflow);
            }

            y.shl1_assign();
        }

        Ok(())
    }
}
