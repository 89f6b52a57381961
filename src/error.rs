//! Error types shared by every fallible arithmetic operation.

use thiserror::Error as ThisError;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Represents all possible arithmetic failures.
///
/// Every failure is a deterministic function of the inputs. When an
/// operation fails, its output value may hold partially written limbs and
/// must not be trusted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The result does not fit in the width of the integer.
    #[error("arithmetic overflow")]
    Overflow,

    /// A subtraction would have produced a negative magnitude.
    ///
    /// Only reported when subtraction runs under [`Underflow::Trap`].
    ///
    /// [`Underflow::Trap`]: crate::primitives::Underflow::Trap
    #[error("negative result")]
    NegativeResult,

    /// The divisor or modulus is zero.
    #[error("division by zero")]
    DivideByZero,
}
