//! Counts that stay exact while they fit in a `u128`.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

use serde::{Serialize, Serializer};
use tracing::trace;

/// The outcome of a counting operation. A value is [`Count::Exact`] until some step of its
/// computation overflows 128 bits, after which it is carried as an [`Count::Approx`] double.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Count {
    Exact(#[serde(serialize_with = "serialize_digits")] u128),
    Approx(f64),
}

impl Count {
    pub const ZERO: Count = Count::Exact(0);
    pub const ONE: Count = Count::Exact(1);

    pub fn exact(&self) -> Option<u128> {
        match self {
            Count::Exact(value) => Some(*value),
            Count::Approx(_) => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Count::Exact(_))
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Count::Exact(value) => *value as f64,
            Count::Approx(value) => *value,
        }
    }
}

impl From<u128> for Count {
    fn from(value: u128) -> Self {
        Count::Exact(value)
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Count::Exact(value) => write!(f, "{value}"),
            Count::Approx(value) => write!(f, "{value:e}"),
        }
    }
}

impl Add for Count {
    type Output = Count;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Count::Exact(lhs), Count::Exact(rhs)) => lhs
                .checked_add(rhs)
                .map(Count::Exact)
                .unwrap_or_else(|| Count::Approx(lhs as f64 + rhs as f64)),
            (lhs, rhs) => Count::Approx(lhs.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Count {
    type Output = Count;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Count::Exact(lhs), Count::Exact(rhs)) => lhs
                .checked_sub(rhs)
                .map(Count::Exact)
                .unwrap_or_else(|| Count::Approx(lhs as f64 - rhs as f64)),
            (lhs, rhs) => Count::Approx(lhs.as_f64() - rhs.as_f64()),
        }
    }
}

impl Mul for Count {
    type Output = Count;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Count::Exact(lhs), Count::Exact(rhs)) => lhs
                .checked_mul(rhs)
                .map(Count::Exact)
                .unwrap_or_else(|| Count::Approx(lhs as f64 * rhs as f64)),
            (lhs, rhs) => Count::Approx(lhs.as_f64() * rhs.as_f64()),
        }
    }
}

/// 128-bit integers exceed what JSON numbers can carry faithfully, so exact counts are written as
/// strings of decimal digits.
fn serialize_digits<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Running product used by every counting operation. Starts at one and stays exact until a step
/// overflows, at which point the accumulated value and all subsequent steps move to `f64`.
#[derive(Debug)]
pub(crate) struct Product {
    count: Count,
}

impl Default for Product {
    fn default() -> Self {
        Self { count: Count::ONE }
    }
}

impl Product {
    #[inline]
    pub fn mul(&mut self, factor: u32) {
        self.count = match self.count {
            Count::Exact(acc) => match acc.checked_mul(factor as u128) {
                Some(product) => Count::Exact(product),
                None => {
                    trace!("{acc} × {factor} overflows; continuing approximately");
                    Count::Approx(acc as f64 * factor as f64)
                }
            },
            Count::Approx(acc) => Count::Approx(acc * factor as f64),
        };
    }

    /// Multiplies by `factor`, then divides by `divisor`. The caller guarantees that `divisor`
    /// divides the product of the accumulator and `factor`.
    #[inline]
    pub fn mul_div(&mut self, factor: u32, divisor: u32) {
        self.count = match self.count {
            Count::Exact(acc) => {
                // with gcd(acc, divisor) cancelled, what remains of the divisor must divide factor
                let common = gcd(acc, divisor as u128);
                let residual_divisor = divisor as u128 / common;
                debug_assert_eq!(0, factor as u128 % residual_divisor);
                match (acc / common).checked_mul(factor as u128 / residual_divisor) {
                    Some(product) => Count::Exact(product),
                    None => {
                        trace!("{acc} × {factor} / {divisor} overflows; continuing approximately");
                        Count::Approx(acc as f64 * factor as f64 / divisor as f64)
                    }
                }
            }
            Count::Approx(acc) => Count::Approx(acc * factor as f64 / divisor as f64),
        };
    }

    pub fn count(&self) -> Count {
        self.count
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
