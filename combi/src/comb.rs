//! Combinatorics: ordered and unordered selections, and arrangements with repetition.

use crate::count::{Count, Product};
use crate::domain::{DomainError, Operation};

/// Number of ordered arrangements of `r` items drawn from `n` without replacement, i.e.,
/// `n! / (n - r)!`. Computed as the falling product `(n - r + 1) × … × n` rather than as a ratio
/// of factorials. There are no arrangements when `r > n`.
pub fn permutation(n: u32, r: u32) -> Result<Count, DomainError> {
    if r > n {
        return Ok(Count::ZERO);
    }
    Operation::Permutation.check(n)?;

    let mut product = Product::default();
    for i in n - r + 1..=n {
        product.mul(i);
    }
    Ok(product.count())
}

/// Binomial coefficient: the number of unordered selections of `r` items drawn from `n`
/// without replacement. There are no selections when `r > n`.
///
/// Iterates over the smaller of `r` and `n - r`. Step `i` multiplies by `n - i + 1` and then
/// divides by `i`, so the running value after step `i` is `C(n, i)` and never strays far from
/// the final answer.
pub fn combination(n: u32, r: u32) -> Result<Count, DomainError> {
    if r > n {
        return Ok(Count::ZERO);
    }
    Operation::Combination.check(n)?;

    let r = r.min(n - r);
    let mut product = Product::default();
    for i in 1..=r {
        product.mul_div(n - (i - 1), i);
    }
    Ok(product.count())
}

/// Number of arrangements of length `exponent` over an alphabet of `base` symbols with
/// repetition allowed: `base^exponent`. No factorial is involved, so there is no ceiling; very
/// large results degrade to an approximation, which may ultimately be infinite.
pub fn power(base: u32, exponent: u32) -> Count {
    let mut product = Product::default();
    for _ in 0..exponent {
        product.mul(base);
    }
    product.count()
}
