//! The magnitude ceiling shared by all factorial-based operations.

use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// The largest `n` accepted by [`Operation::check`]. `171!` exceeds the range of an `f64`, so
/// anything beyond this point cannot be carried approximately either.
pub const MAX_N: u32 = 170;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Operation {
    #[strum(serialize = "factorial")]
    Factorial,
    #[strum(serialize = "permutation")]
    Permutation,
    #[strum(serialize = "combination")]
    Combination,
}

impl Operation {
    /// Fails with a [`DomainError`] if `n` lies above [`MAX_N`].
    #[inline]
    pub fn check(self, n: u32) -> Result<(), DomainError> {
        if n > MAX_N {
            Err(DomainError { operation: self, n })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("number too large to compute the {operation}: {n} exceeds {}", MAX_N)]
pub struct DomainError {
    pub operation: Operation,
    pub n: u32,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn check_boundary() {
        for operation in Operation::iter() {
            assert_eq!(Ok(()), operation.check(0));
            assert_eq!(Ok(()), operation.check(MAX_N));
            assert_eq!(
                Err(DomainError { operation, n: MAX_N + 1 }),
                operation.check(MAX_N + 1)
            );
        }
    }

    #[test]
    fn message() {
        let err = Operation::Combination.check(200).unwrap_err();
        assert_eq!(
            "number too large to compute the combination: 200 exceeds 170",
            err.to_string()
        );
    }
}
