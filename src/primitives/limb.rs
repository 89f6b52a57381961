//! Limb storage units
//!
//! A limb is one digit of a `Fixed` integer in base `2^BITS`. Each limb type
//! is paired with two accumulator types:
//! - `Wide`, unsigned, able to hold `MAX + MAX + 1` (a sum plus carry)
//! - `SignedWide`, signed, able to hold `0 - MAX - 1` (a difference plus
//!   borrow)
//!
//! The pairing is fixed per limb type, so an accumulator that is too narrow
//! cannot be expressed.

use std::fmt::{Debug, LowerHex, UpperHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

/// A native unsigned integer usable as the storage unit of a `Fixed`.
pub trait Limb:
    Copy
    + Debug
    + Default
    + Eq
    + Ord
    + Hash
    + LowerHex
    + UpperHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Unsigned accumulator used for addition carries.
    type Wide: Copy + Debug + Default + Eq;

    /// Signed accumulator used for subtraction borrows.
    type SignedWide: Copy + Debug + Default + Eq;

    /// Width of the limb in bits.
    const BITS: u32;

    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Computes `self + rhs + carry` in the wide accumulator.
    ///
    /// Returns the low limb and the carry out, which is `0` or `1`.
    fn add_carry(self, rhs: Self, carry: Self::Wide) -> (Self, Self::Wide);

    /// Computes `self - rhs + borrow` in the signed accumulator, where
    /// `borrow` is `0` or `-1`.
    ///
    /// Returns the low limb (wrapped) and the borrow out, `0` or `-1`.
    fn sub_borrow(self, rhs: Self, borrow: Self::SignedWide) -> (Self, Self::SignedWide);

    /// Widens the limb losslessly.
    fn to_u128(self) -> u128;

    /// Keeps the lowest `BITS` bits of `value`.
    fn truncate(value: u128) -> Self;

    fn leading_zeros(self) -> u32;
}

macro_rules! impl_limb {
    ($limb:ty, $wide:ty, $signed:ty) => {
        impl Limb for $limb {
            type Wide = $wide;
            type SignedWide = $signed;

            const BITS: u32 = <$limb>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$limb>::MAX;

            #[inline]
            fn add_carry(self, rhs: Self, carry: $wide) -> (Self, $wide) {
                let m = self as $wide + rhs as $wide + carry;

                ((m & <$limb>::MAX as $wide) as $limb, m >> <$limb>::BITS)
            }

            #[inline]
            fn sub_borrow(self, rhs: Self, borrow: $signed) -> (Self, $signed) {
                let m = self as $signed - rhs as $signed + borrow;

                // arithmetic shift keeps the borrow as -1
                ((m & <$limb>::MAX as $signed) as $limb, m >> <$limb>::BITS)
            }

            #[inline]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn truncate(value: u128) -> Self {
                value as $limb
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$limb>::leading_zeros(self)
            }
        }
    };
}

impl_limb!(u8, u16, i16);
impl_limb!(u16, u32, i32);
impl_limb!(u32, u64, i64);
