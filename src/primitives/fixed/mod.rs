//! Fixed-width unsigned integer
//!
//! This module defines `Fixed<L, N>`, an unsigned integer made of exactly
//! `N` limbs of type `L`, stored least-significant limb first.
//!
//! The operations are split by layer:
//! - `core`   storage primitives and comparison
//! - `bits`   single-bit access and one-bit shifts
//! - `arith`  addition, subtraction and shift-and-add multiplication
//! - `divmod` binary long division
//! - `pow`    square-and-multiply modular exponentiation
//! - `conv`   loading from and converting to native integers
//! - `ops`    operator traits and value-returning helpers
//! - `fmt`    hexadecimal formatting
//!
//! Arithmetic entry points take their operands by reference and write into
//! a caller-supplied `&mut Fixed`. Because an exclusive borrow can never
//! alias a shared one, in-place variants (`shl1_assign`, `shr1_assign`) are
//! provided where operating on a single buffer is meaningful.

mod arith;
mod bits;
mod conv;
mod core;
mod divmod;
mod fmt;
mod ops;
mod pow;

pub use self::core::Fixed;
