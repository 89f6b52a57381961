//! Loading a `Fixed` from a native integer and reading one back.

use crate::error::{Error, Result};
use crate::primitives::{Fixed, Limb};

impl<L: Limb, const N: usize> Fixed<L, N> {
    /// Clears `self` and decomposes `value` into limbs, least significant
    /// first, until the value is exhausted.
    ///
    /// # Errors
    /// `Error::Overflow` if `value` needs more than `N` limbs. `self` then
    /// holds the truncated low limbs.
    pub fn load(&mut self, value: u128) -> Result<()> {
        self.clear();

        let mut rest = value;

        for limb in self.0.iter_mut() {
            if rest == 0 {
                return Ok(());
            }

            *limb = L::truncate(rest);
            rest >>= L::BITS;
        }

        if rest != 0 {
            tracing::trace!(op = "load", bits = Self::BITS, "overflow");
            return Err(Error::Overflow);
        }

        Ok(())
    }

    /// Reads the value back as a `u128`.
    ///
    /// # Errors
    /// `Error::Overflow` if any bit at or above position 128 is set.
    pub fn to_u128(&self) -> Result<u128> {
        let mut out = 0u128;

        for (i, &limb) in self.0.iter().enumerate() {
            let shift = i as u32 * L::BITS;

            if shift >= u128::BITS {
                if limb != L::ZERO {
                    return Err(Error::Overflow);
                }
                continue;
            }

            out |= limb.to_u128() << shift;
        }

        Ok(out)
    }
}
