//! Fixed-width unsigned big integers
//!
//! This crate provides a small, self-contained arithmetic engine for
//! unsigned integers of a constant bit width, for contexts where a
//! dynamically-sized bignum library is unavailable or undesired.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! operation works on fixed-size, stack-resident limb arrays and writes its
//! result into a caller-supplied output value.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `Fixed<L, N>` integer type, the `Limb` storage abstraction and the
//!   underflow policy used by subtraction. Ready-made widths such as `U64`
//!   (four 16-bit limbs) are re-exported from here.
//!
//! - `error`  
//!   The error taxonomy shared by every fallible operation: overflow,
//!   negative result and division by zero.
//!
//! # Layering
//!
//! 1. Storage primitives: clear, copy, zero test, comparison, bit access
//! 2. Linear arithmetic: add, subtract, single-bit shifts
//! 3. Composite arithmetic: shift-and-add multiply, binary long division
//! 4. Modular exponentiation: square-and-multiply
//! 5. Loading from and converting to native integers
//!
//! Higher layers only ever call lower ones.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Width fixed at compile time through type parameters
//! - Every failure surfaced as an explicit `Result`, never a silent wrap
//!   (wrapping is available, but only under a name that says so)
//!
//! This crate makes no claim of constant-time behaviour and is not intended
//! for production cryptography.

pub mod error;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::{Fixed, Limb, U64, U64x32, U128, U256, Underflow};
