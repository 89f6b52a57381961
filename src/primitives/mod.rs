//! Primitive types
//!
//! This module defines the fixed-width unsigned integer type and the
//! pieces it is parameterised over.
//!
//! Primitives are simple, fixed-size, allocation-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate a full-featured,
//! variable-length big-integer library.
//!
//! Current primitives include:
//! - `Fixed<L, N>`: an unsigned integer of `N` limbs of type `L`
//! - `Limb`: the storage unit trait, implemented for `u8`, `u16` and `u32`
//! - `Underflow`: the policy applied when a subtraction goes negative
//!
//! The common widths are provided as type aliases.

mod fixed;
mod limb;
mod policy;

pub use fixed::Fixed;
pub use limb::Limb;
pub use policy::Underflow;

/// 64-bit integer made of four 16-bit limbs (the reference configuration).
pub type U64 = Fixed<u16, 4>;

/// 64-bit integer made of two 32-bit limbs.
pub type U64x32 = Fixed<u32, 2>;

/// 128-bit integer made of eight 16-bit limbs.
pub type U128 = Fixed<u16, 8>;

/// 256-bit integer made of eight 32-bit limbs.
pub type U256 = Fixed<u32, 8>;
