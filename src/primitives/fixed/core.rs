//! Storage primitives for `Fixed`.

use crate::primitives::Limb;
use std::cmp::Ordering;

/// Fixed-width unsigned integer of `N` limbs.
///
/// The value is `Σ limbs[i] · 2^(i · L::BITS)`: limb `0` is the least
/// significant. The length never changes and no operation allocates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fixed<L: Limb, const N: usize>(pub(crate) [L; N]);

impl<L: Limb, const N: usize> Fixed<L, N> {
    /// Number of limbs.
    pub const LIMBS: usize = N;

    /// Total width in bits.
    pub const BITS: u32 = L::BITS * N as u32;

    /// The value zero.
    pub const ZERO: Self = Self([L::ZERO; N]);

    /// The maximum representable value (2^BITS − 1).
    pub const MAX: Self = Self([L::MAX; N]);

    const NONEMPTY: () = assert!(N > 0, "a Fixed integer needs at least one limb");

    /// Returns the value one.
    pub fn one() -> Self {
        let () = Self::NONEMPTY;

        let mut out = Self::ZERO;
        out.0[0] = L::ONE;

        out
    }

    /// Builds a value from little-endian limbs.
    pub const fn from_limbs(limbs: [L; N]) -> Self {
        Self(limbs)
    }

    /// Borrows the little-endian limbs.
    pub const fn limbs(&self) -> &[L; N] {
        &self.0
    }

    /// Sets every limb to zero.
    pub fn clear(&mut self) {
        self.0 = [L::ZERO; N];
    }

    /// Overwrites every limb with the limbs of `src`.
    pub fn copy_from(&mut self, src: &Self) {
        self.0 = src.0;
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == L::ZERO)
    }

    /// Compares two values as unsigned magnitudes.
    ///
    /// Limbs are compared from the most significant down; the first
    /// differing limb decides.
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        for (l, r) in a.0.iter().zip(b.0.iter()).rev() {
            match l.cmp(r) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        Ordering::Equal
    }

    /// Counts the number of leading zero bits.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=BITS`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == L::ZERO {
                count += L::BITS;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Number of significant bits; zero for the value zero.
    pub fn bit_len(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

impl<L: Limb, const N: usize> Ord for Fixed<L, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl<L: Limb, const N: usize> PartialOrd for Fixed<L, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The default value is zero.
///
/// Implemented by hand because `Default` is not available for arrays of
/// arbitrary length.
impl<L: Limb, const N: usize> Default for Fixed<L, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<L: Limb, const N: usize> AsRef<[L]> for Fixed<L, N> {
    fn as_ref(&self) -> &[L] {
        &self.0
    }
}

impl<L: Limb, const N: usize> AsRef<[L; N]> for Fixed<L, N> {
    fn as_ref(&self) -> &[L; N] {
        &self.0
    }
}
