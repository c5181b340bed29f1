//! Age expressions — parses `30`, `>30`, `<=25`, `21-29` into an [`AgeFilter`].
//!
//! Two grammars are tried in order against the expression with surrounding
//! whitespace trimmed and inner spaces removed:
//!
//! 1. range: `<digits>-<digits>`, inclusive, bounds in either order
//! 2. comparison: `(>=|<=|>|<|==)?<digits>`, `==` when the operator is omitted
//!
//! Only the exact comparison (`==`) accepts non-integer numeric ages; every
//! other form requires an integer `age` and is simply false without one.

use crate::{error::InvalidExpression, UserRecord};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("range grammar must compile"));

static COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(>=|<=|>|<|==)?([0-9]+)$").expect("comparison grammar must compile")
});

/// Ordering comparison against an integer age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Lt,
    Ge,
    Le,
}

impl CmpOp {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            ">" => Some(CmpOp::Gt),
            "<" => Some(CmpOp::Lt),
            ">=" => Some(CmpOp::Ge),
            "<=" => Some(CmpOp::Le),
            _ => None,
        }
    }

    fn eval(self, age: i128, bound: i128) -> bool {
        match self {
            CmpOp::Gt => age > bound,
            CmpOp::Lt => age < bound,
            CmpOp::Ge => age >= bound,
            CmpOp::Le => age <= bound,
        }
    }
}

impl std::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CmpOp::Gt => write!(f, ">"),
            CmpOp::Lt => write!(f, "<"),
            CmpOp::Ge => write!(f, ">="),
            CmpOp::Le => write!(f, "<="),
        }
    }
}

/// A parsed age predicate, evaluated per record with [`AgeFilter::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeFilter {
    /// Raw equality with the stored age.
    Exact(u64),
    /// Inclusive range, `lo <= hi`.
    Range { lo: u64, hi: u64 },
    /// Ordering comparison; integer ages only.
    Compare(CmpOp, u64),
}

impl AgeFilter {
    pub fn matches(&self, user: &UserRecord) -> bool {
        match *self {
            AgeFilter::Exact(n) => user.age.as_ref().is_some_and(|age| age.equals(n)),
            AgeFilter::Range { lo, hi } => user
                .age_int()
                .is_some_and(|age| (i128::from(lo)..=i128::from(hi)).contains(&age)),
            AgeFilter::Compare(op, n) => user
                .age_int()
                .is_some_and(|age| op.eval(age, i128::from(n))),
        }
    }
}

impl std::fmt::Display for AgeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeFilter::Exact(n) => write!(f, "{n}"),
            AgeFilter::Range { lo, hi } => write!(f, "{lo}-{hi}"),
            AgeFilter::Compare(op, n) => write!(f, "{op}{n}"),
        }
    }
}

impl FromStr for AgeFilter {
    type Err = InvalidExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_age_filter(s)
    }
}

/// Parse an age expression.
///
/// Fails with [`InvalidExpression`] when neither grammar matches, or when a
/// number does not fit in a `u64`.
pub fn parse_age_filter(expr: &str) -> Result<AgeFilter, InvalidExpression> {
    let invalid = || InvalidExpression {
        expr: expr.to_string(),
    };
    let s = expr.trim().replace(' ', "");

    if let Some(caps) = RANGE.captures(&s) {
        let a: u64 = caps[1].parse().map_err(|_| invalid())?;
        let b: u64 = caps[2].parse().map_err(|_| invalid())?;
        return Ok(AgeFilter::Range {
            lo: a.min(b),
            hi: a.max(b),
        });
    }

    if let Some(caps) = COMPARISON.captures(&s) {
        let n: u64 = caps[2].parse().map_err(|_| invalid())?;
        return match caps.get(1).map(|m| m.as_str()) {
            None | Some("==") => Ok(AgeFilter::Exact(n)),
            Some(token) => CmpOp::from_token(token)
                .map(|op| AgeFilter::Compare(op, n))
                .ok_or_else(invalid),
        };
    }

    Err(invalid())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
