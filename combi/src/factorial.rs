use crate::count::{Count, Product};
use crate::domain::{DomainError, Operation};

/// `n!`, accumulated iteratively from `2` through `n`. Exact up to `34!`; approximate from there
/// until the ceiling at `170!`.
pub fn factorial(n: u32) -> Result<Count, DomainError> {
    if n == 0 || n == 1 {
        return Ok(Count::ONE);
    }
    Operation::Factorial.check(n)?;

    let mut product = Product::default();
    for i in 2..=n {
        product.mul(i);
    }
    Ok(product.count())
}
