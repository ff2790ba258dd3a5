//! Turns raw text operands into an evaluated expression. Parsing and range validation happen
//! here; the engine itself only ever sees well-formed integers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::debug;

use crate::comb::{combination, permutation};
use crate::count::Count;
use crate::domain::DomainError;
use crate::factorial::factorial;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    #[strum(serialize = "factorial")]
    Factorial,
    #[strum(serialize = "permutation")]
    Permutation,
    #[strum(serialize = "combination")]
    Combination,
}

impl FromStr for Formula {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "factorial" => Ok(Formula::Factorial),
            "p" | "permutation" => Ok(Formula::Permutation),
            "c" | "combination" => Ok(Formula::Combination),
            _ => Err(InputError::UnknownFormula(s.into())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operand {
    #[strum(serialize = "n")]
    N,
    #[strum(serialize = "r")]
    R,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown formula '{0}'; expected factorial, permutation or combination")]
    UnknownFormula(String),

    #[error("'{value}' is not a non-negative integer; enter one for {operand}")]
    NotNonNegativeInteger { operand: Operand, value: String },

    #[error("'{value}' is out of range for {operand}")]
    OutOfRange { operand: Operand, value: String },

    #[error("r is required for a {0}")]
    MissingR(Formula),

    #[error("r ({r}) cannot exceed n ({n}) in a {formula}")]
    RExceedsN { formula: Formula, n: u32, r: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parses a plain, unsigned decimal integer, ignoring surrounding whitespace. Signs, fractions and
/// exponents are all rejected.
pub fn parse_operand(operand: Operand, text: &str) -> Result<u32, InputError> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNonNegativeInteger {
            operand,
            value: text.into(),
        });
    }
    digits.parse().map_err(|_| InputError::OutOfRange {
        operand,
        value: text.into(),
    })
}

/// A counting expression with its operands bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum Expression {
    Factorial { n: u32 },
    Permutation { n: u32, r: u32 },
    Combination { n: u32, r: u32 },
}

impl Expression {
    pub fn formula(&self) -> Formula {
        match self {
            Expression::Factorial { .. } => Formula::Factorial,
            Expression::Permutation { .. } => Formula::Permutation,
            Expression::Combination { .. } => Formula::Combination,
        }
    }

    pub fn evaluate(&self) -> Result<Count, DomainError> {
        match *self {
            Expression::Factorial { n } => factorial(n),
            Expression::Permutation { n, r } => permutation(n, r),
            Expression::Combination { n, r } => combination(n, r),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Factorial { n } => write!(f, "{n}!"),
            Expression::Permutation { n, r } => write!(f, "P({n},{r})"),
            Expression::Combination { n, r } => write!(f, "C({n},{r})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub expression: Expression,
    pub value: Count,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Binds the raw operands to `formula`, validating them the way a user-facing calculator should.
/// `r_text` is ignored for a factorial. Unlike the engine, which answers zero, the calculator
/// rejects `r > n` as a user error.
pub fn bind(formula: Formula, n_text: &str, r_text: Option<&str>) -> Result<Expression, InputError> {
    let n = parse_operand(Operand::N, n_text)?;
    let bind_pair: fn(u32, u32) -> Expression = match formula {
        Formula::Factorial => return Ok(Expression::Factorial { n }),
        Formula::Permutation => |n, r| Expression::Permutation { n, r },
        Formula::Combination => |n, r| Expression::Combination { n, r },
    };

    let r_text = r_text
        .filter(|text| !text.trim().is_empty())
        .ok_or(InputError::MissingR(formula))?;
    let r = parse_operand(Operand::R, r_text)?;
    if r > n {
        return Err(InputError::RExceedsN { formula, n, r });
    }
    Ok(bind_pair(n, r))
}

pub fn evaluate(formula: Formula, n_text: &str, r_text: Option<&str>) -> Result<Evaluation, CalcError> {
    let expression = bind(formula, n_text, r_text)?;
    debug!("evaluating {expression}");
    let value = expression.evaluate()?;
    Ok(Evaluation { expression, value })
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::domain::Operation;

    use super::*;

    #[test]
    fn parse_formula() {
        assert_eq!(Ok(Formula::Factorial), "factorial".parse());
        assert_eq!(Ok(Formula::Permutation), " P ".parse());
        assert_eq!(Ok(Formula::Combination), "Combination".parse());
        assert_eq!(
            Err(InputError::UnknownFormula("arrangement".into())),
            "arrangement".parse::<Formula>()
        );
    }

    #[test]
    fn formula_round_trips_through_display() {
        for formula in Formula::iter() {
            assert_eq!(Ok(formula), formula.to_string().parse());
        }
    }

    #[test]
    fn parse_operand_accepts_digits() {
        assert_eq!(Ok(0), parse_operand(Operand::N, "0"));
        assert_eq!(Ok(21), parse_operand(Operand::N, " 21 "));
        assert_eq!(Ok(u32::MAX), parse_operand(Operand::R, "4294967295"));
    }

    #[test]
    fn parse_operand_rejects_non_integers() {
        for text in ["", "  ", "-1", "+3", "3.5", "1e3", "ten", "12abc"] {
            assert_eq!(
                Err(InputError::NotNonNegativeInteger {
                    operand: Operand::N,
                    value: text.into()
                }),
                parse_operand(Operand::N, text),
                "text: '{text}'"
            );
        }
    }

    #[test]
    fn parse_operand_out_of_range() {
        assert_eq!(
            Err(InputError::OutOfRange {
                operand: Operand::R,
                value: "4294967296".into()
            }),
            parse_operand(Operand::R, "4294967296")
        );
    }

    #[test]
    fn bind_factorial_ignores_r() {
        assert_eq!(
            Ok(Expression::Factorial { n: 5 }),
            bind(Formula::Factorial, "5", Some("garbage"))
        );
        assert_eq!(Ok(Expression::Factorial { n: 5 }), bind(Formula::Factorial, "5", None));
    }

    #[test]
    fn bind_requires_r() {
        assert_eq!(
            Err(InputError::MissingR(Formula::Permutation)),
            bind(Formula::Permutation, "5", None)
        );
        assert_eq!(
            Err(InputError::MissingR(Formula::Combination)),
            bind(Formula::Combination, "5", Some(" "))
        );
    }

    #[test]
    fn bind_rejects_r_exceeding_n() {
        assert_eq!(
            Err(InputError::RExceedsN {
                formula: Formula::Combination,
                n: 3,
                r: 5
            }),
            bind(Formula::Combination, "3", Some("5"))
        );
    }

    #[test]
    fn expression_formula() {
        assert_eq!(Formula::Permutation, Expression::Permutation { n: 4, r: 2 }.formula());
    }

    #[test]
    fn evaluate_formats() {
        assert_eq!(
            "10! = 3628800",
            evaluate(Formula::Factorial, "10", None).unwrap().to_string()
        );
        assert_eq!(
            "P(21,3) = 7980",
            evaluate(Formula::Permutation, "21", Some("3")).unwrap().to_string()
        );
        assert_eq!(
            "C(21,3) = 1330",
            evaluate(Formula::Combination, "21", Some("3")).unwrap().to_string()
        );
    }

    #[test]
    fn evaluate_surfaces_domain_error() {
        let err = evaluate(Formula::Factorial, "171", None).unwrap_err();
        assert_eq!(
            CalcError::Domain(DomainError {
                operation: Operation::Factorial,
                n: 171
            }),
            err
        );
        assert_eq!(
            "number too large to compute the factorial: 171 exceeds 170",
            err.to_string()
        );
    }

    #[test]
    fn evaluate_surfaces_input_error() {
        let err = evaluate(Formula::Permutation, "-4", Some("2")).unwrap_err();
        assert_eq!(
            "'-4' is not a non-negative integer; enter one for n",
            err.to_string()
        );
    }

    #[test]
    fn error_report_is_the_message() {
        let cases = [
            (
                evaluate(Formula::Factorial, "171", None).unwrap_err(),
                "number too large to compute the factorial: 171 exceeds 170",
            ),
            (
                evaluate(Formula::Permutation, "3", Some("5")).unwrap_err(),
                "r (5) cannot exceed n (3) in a permutation",
            ),
        ];
        for (err, message) in cases {
            let report = format!("{:?}", anyhow::Error::from(err));
            assert!(report.starts_with(message), "{report}");
            assert!(!report.contains("Caused by"), "{report}");
        }
    }

    #[test]
    fn evaluation_serializes() {
        let evaluation = evaluate(Formula::Combination, "5", Some("3")).unwrap();
        assert_eq!(
            r#"{"expression":{"formula":"combination","n":5,"r":3},"value":{"exact":"10"}}"#,
            serde_json::to_string(&evaluation).unwrap()
        );
    }
}
