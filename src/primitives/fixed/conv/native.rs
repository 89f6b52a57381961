//! Conversions between `Fixed` and native unsigned integers
//!
//! Both directions are fallible: a native value may be wider than the
//! configured width, and a `Fixed` may hold more bits than the native type.

use crate::error::Error;
use crate::primitives::{Fixed, Limb};

macro_rules! impl_native {
    ($($native:ty),* $(,)?) => {
        $(
            /// Loads a native integer, failing if it does not fit.
            impl<L: Limb, const N: usize> TryFrom<$native> for Fixed<L, N> {
                type Error = Error;

                fn try_from(value: $native) -> Result<Self, Self::Error> {
                    let mut out = Self::ZERO;
                    out.load(value as u128)?;

                    Ok(out)
                }
            }

            /// Narrows to a native integer, failing if high bits are set.
            impl<L: Limb, const N: usize> TryFrom<Fixed<L, N>> for $native {
                type Error = Error;

                fn try_from(value: Fixed<L, N>) -> Result<Self, Self::Error> {
                    let wide = value.to_u128()?;

                    <$native>::try_from(wide).map_err(|_| Error::Overflow)
                }
            }
        )*
    };
}

impl_native!(u8, u16, u32, u64, u128, usize);
