//! Binary long division for `Fixed`.

use crate::error::{Error, Result};
use crate::primitives::{Fixed, Limb};

impl<L: Limb, const N: usize> Fixed<L, N> {
    /// Computes `numerator / divisor` and `numerator % divisor` in a single
    /// pass.
    ///
    /// The quotient is built one bit at a time from bit `BITS - 1` down to
    /// `0`: the running remainder is shifted left, takes the next numerator
    /// bit, and the divisor is subtracted from it whenever it fits.
    ///
    /// Either output may be `None`; the full pass runs regardless. Outputs
    /// are only written once the pass has completed.
    ///
    /// # Errors
    /// `Error::DivideByZero` if `divisor` is zero. Neither output is
    /// touched in that case.
    pub fn divide(
        numerator: &Self,
        divisor: &Self,
        quotient: Option<&mut Self>,
        remainder: Option<&mut Self>,
    ) -> Result<()> {
        if divisor.is_zero() {
            tracing::trace!(op = "divide", bits = Self::BITS, "division by zero");
            return Err(Error::DivideByZero);
        }

        let _span = tracing::trace_span!("divide", bits = Self::BITS).entered();

        let mut q = Self::ZERO;
        let mut r = Self::ZERO;

        for i in (0..Self::BITS).rev() {
            // for divisors above 2^(BITS-1) the shifted remainder can need
            // one bit more than BITS; the wrapping subtraction below still
            // lands on the right value because the true difference fits
            let spilled = r.bit(Self::BITS - 1);

            r.shl1_assign();
            r.set_bit(0, numerator.bit(i));

            if spilled || r >= *divisor {
                let current = r;
                Self::overflowing_sub(&current, divisor, &mut r);
                q.set_bit(i, true);
            }
        }

        if let Some(out) = quotient {
            *out = q;
        }
        if let Some(out) = remainder {
            *out = r;
        }

        Ok(())
    }
}
