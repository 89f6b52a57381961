//! Operator traits and value-returning helpers for `Fixed`
//!
//! These wrap the buffer-oriented entry points for callers that prefer to
//! work with values. Each one names its overflow behavior:
//! - `+` panics on overflow, `checked_add` reports it, `wrapping_add` wraps
//! - `-` wraps, `checked_sub` reports a negative result
//! - `*` wraps, `checked_mul` reports overflow
//! - `/` and `%` panic on a zero divisor, `div_rem` reports it
//! - `<<` and `>>` discard shifted-out bits; counts of `BITS` or more
//!   yield zero

use crate::error::Result;
use crate::primitives::{Fixed, Limb, Underflow};
use std::ops::{Add, Div, Mul, Rem, Shl, Shr, Sub};

impl<L: Limb, const N: usize> Fixed<L, N> {
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let mut out = Self::ZERO;
        Self::add(&self, &rhs, &mut out)?;

        Ok(out)
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        Self::overflowing_add(&self, &rhs, &mut out);

        out
    }

    /// Subtracts, reporting `Error::NegativeResult` if `rhs > self`
    /// regardless of the build's default policy.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let mut out = Self::ZERO;
        Self::subtract_with(&self, &rhs, &mut out, Underflow::Trap)?;

        Ok(out)
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        Self::overflowing_sub(&self, &rhs, &mut out);

        out
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let mut out = Self::ZERO;
        Self::checked_multiply(&self, &rhs, &mut out)?;

        Ok(out)
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;

        match Self::multiply(&self, &rhs, &mut out) {
            Ok(()) => out,
            Err(err) => unreachable!("wrapping multiply failed: {err}"),
        }
    }

    /// Returns `(self / divisor, self % divisor)`.
    pub fn div_rem(self, divisor: Self) -> Result<(Self, Self)> {
        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;
        Self::divide(&self, &divisor, Some(&mut quotient), Some(&mut remainder))?;

        Ok((quotient, remainder))
    }

    /// Returns `self^exponent mod modulus`.
    pub fn checked_pow_mod(self, exponent: Self, modulus: Self) -> Result<Self> {
        let mut out = Self::ZERO;
        Self::pow_mod(&self, &exponent, &modulus, &mut out)?;

        Ok(out)
    }
}

impl<L: Limb, const N: usize> Add for Fixed<L, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = Self::ZERO;

        if Self::overflowing_add(&self, &rhs, &mut out) {
            panic!("attempt to add with overflow");
        }

        out
    }
}

/// Subtraction modulo 2^BITS.
impl<L: Limb, const N: usize> Sub for Fixed<L, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

/// Multiplication modulo 2^BITS.
impl<L: Limb, const N: usize> Mul for Fixed<L, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl<L: Limb, const N: usize> Div for Fixed<L, N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        let mut quotient = Self::ZERO;
        Self::divide(&self, &rhs, Some(&mut quotient), None)
            .expect("divisor checked non-zero");

        quotient
    }
}

impl<L: Limb, const N: usize> Rem for Fixed<L, N> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        let mut remainder = Self::ZERO;
        Self::divide(&self, &rhs, None, Some(&mut remainder))
            .expect("divisor checked non-zero");

        remainder
    }
}

/// Logical left shift by a bit count.
impl<L: Limb, const N: usize> Shl<u32> for Fixed<L, N> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        if rhs >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (rhs / L::BITS) as usize;
        let bit_shift = rhs % L::BITS;

        let mut out = Self::ZERO;

        for i in limb_shift..N {
            let src = i - limb_shift;
            let mut limb = self.0[src] << bit_shift;

            if bit_shift != 0 && src > 0 {
                limb = limb | (self.0[src - 1] >> (L::BITS - bit_shift));
            }

            out.0[i] = limb;
        }

        out
    }
}

/// Logical right shift by a bit count.
impl<L: Limb, const N: usize> Shr<u32> for Fixed<L, N> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        if rhs >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (rhs / L::BITS) as usize;
        let bit_shift = rhs % L::BITS;

        let mut out = Self::ZERO;

        for i in 0..N - limb_shift {
            let src = i + limb_shift;
            let mut limb = self.0[src] >> bit_shift;

            if bit_shift != 0 && src + 1 < N {
                limb = limb | (self.0[src + 1] << (L::BITS - bit_shift));
            }

            out.0[i] = limb;
        }

        out
    }
}
