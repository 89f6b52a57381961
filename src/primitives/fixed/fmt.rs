//! Hexadecimal formatting for `Fixed`.

use crate::primitives::{Fixed, Limb};
use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

impl<L: Limb, const N: usize> Fixed<L, N> {
    const HEX_DIGITS: usize = (L::BITS / 4) as usize;

    fn hex_string(&self, upper: bool) -> String {
        let mut out = String::with_capacity(N * Self::HEX_DIGITS);

        for limb in self.0.iter().rev() {
            let group = if upper {
                format!("{:0w$X}", limb, w = Self::HEX_DIGITS)
            } else {
                format!("{:0w$x}", limb, w = Self::HEX_DIGITS)
            };

            out.push_str(&group);
        }

        let trimmed = out.trim_start_matches('0');

        if trimmed.is_empty() {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    }
}

impl<L: Limb, const N: usize> Display for Fixed<L, N> {
    /// Formats the value as `_`-separated hexadecimal limb groups.
    ///
    /// Limbs are printed most significant first, each as a fixed-width
    /// group of uppercase digits.
    ///
    /// Example for `U64`:
    /// `0000_0001_FFFF_FFFE`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, limb) in self.0.iter().rev().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }

            write!(f, "{:0w$X}", limb, w = Self::HEX_DIGITS)?;
        }

        Ok(())
    }
}

impl<L: Limb, const N: usize> LowerHex for Fixed<L, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_string(false))
    }
}

impl<L: Limb, const N: usize> UpperHex for Fixed<L, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_string(true))
    }
}
