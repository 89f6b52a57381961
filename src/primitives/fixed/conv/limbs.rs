//! Conversions between `Fixed` and its raw limb array.

use crate::primitives::{Fixed, Limb};

/// Interprets a little-endian limb array as a value.
impl<L: Limb, const N: usize> From<[L; N]> for Fixed<L, N> {
    fn from(value: [L; N]) -> Self {
        Fixed(value)
    }
}

/// Returns the little-endian limbs of a value.
impl<L: Limb, const N: usize> From<Fixed<L, N>> for [L; N] {
    fn from(value: Fixed<L, N>) -> Self {
        value.0
    }
}
