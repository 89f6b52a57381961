//! Modular exponentiation for `Fixed`.

use crate::error::Result;
use crate::primitives::{Fixed, Limb};

impl<L: Limb, const N: usize> Fixed<L, N> {
    /// Computes `result = base^exponent mod modulus` by square-and-multiply.
    ///
    /// The exponent is consumed one bit at a time from the least
    /// significant end. Intermediate products are formed with
    /// `checked_multiply`, so a modulus whose square does not fit in `BITS`
    /// bits surfaces as `Error::Overflow` rather than a wrong answer.
    ///
    /// This departs from building on the wrapping `multiply`: a truncated
    /// product would reduce to a wrong residue without any error.
    ///
    /// `base` is reduced first and the initial `1` is reduced as well, so a
    /// modulus of one always yields zero, even for a zero exponent.
    ///
    /// # Errors
    /// - `Error::DivideByZero` if `modulus` is zero
    /// - `Error::Overflow` if an intermediate product does not fit
    ///
    /// The first failure aborts the computation; `result` is then undefined.
    pub fn pow_mod(base: &Self, exponent: &Self, modulus: &Self, result: &mut Self) -> Result<()> {
        let _span = tracing::trace_span!("pow_mod", bits = Self::BITS).entered();

        let mut b = Self::ZERO;
        let mut e = *exponent;
        let mut product = Self::ZERO;

        Self::divide(&Self::one(), modulus, None, Some(&mut *result))?;
        Self::divide(base, modulus, None, Some(&mut b))?;

        while !e.is_zero() {
            if e.bit(0) {
                Self::checked_multiply(&*result, &b, &mut product)?;
                Self::divide(&product, modulus, None, Some(&mut *result))?;
            }

            e.shr1_assign();

            // the final square would go unused
            if !e.is_zero() {
                Self::checked_multiply(&b, &b, &mut product)?;
                Self::divide(&product, modulus, None, Some(&mut b))?;
            }
        }

        Ok(())
    }
}
