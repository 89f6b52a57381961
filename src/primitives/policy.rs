//! Underflow policy for subtraction
//!
//! Subtracting a larger value from a smaller one leaves a borrow out of the
//! top limb. The policy decides whether that borrow is an error or whether
//! the result wraps modulo `2^BITS`.
//!
//! The default is `Wrap`, which binary long division relies on. Building
//! with the `trap-negative` feature flips the default to `Trap`; the policy
//! can always be chosen explicitly with `Fixed::subtract_with`.

/// What subtraction does when the result would be negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Underflow {
    /// Return `a - b mod 2^BITS` and report success.
    Wrap,

    /// Return `Error::NegativeResult`. The output still holds the wrapped
    /// value.
    Trap,
}

impl Underflow {
    /// The policy used by `Fixed::subtract` in this build.
    #[cfg(not(feature = "trap-negative"))]
    pub const DEFAULT: Self = Underflow::Wrap;

    /// The policy used by `Fixed::subtract` in this build.
    #[cfg(feature = "trap-negative")]
    pub const DEFAULT: Self = Underflow::Trap;
}

impl Default for Underflow {
    fn default() -> Self {
        Self::DEFAULT
    }
}
