//! Integer conversion utilities
//!
//! This module groups the conversions between `Fixed` and native integer
//! types, following these principles:
//! - limbs are filled least significant first
//! - no implicit truncation
//! - every narrowing conversion is fallible and reports `Error::Overflow`
//!
//! The conversions are split by concern to keep each file small and easy
//! to reason about.

mod limbs;
mod load;
mod native;
