//! The type-unification rule engine.
//!
//! Maps the sequence of values observed in one column to a single SQL
//! column type. Rules are tried in a fixed order and the first rule that
//! covers every value in the column wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueKind};

/// A SQL column type decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlType {
    /// Fixed-width double-precision floating type.
    DoublePrecision,
    /// 16-bit integer type.
    SmallInt,
    /// 32-bit integer type.
    Integer,
    /// 64-bit integer type.
    BigInt,
    /// Exact fixed-point type declared with a total digit count and an
    /// optional fractional digit count.
    Decimal {
        precision: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<u32>,
    },
    /// Variable-length text type.
    Text,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::DoublePrecision => write!(f, "DOUBLE PRECISION"),
            SqlType::SmallInt => write!(f, "SMALLINT"),
            SqlType::Integer => write!(f, "INTEGER"),
            SqlType::BigInt => write!(f, "BIGINT"),
            SqlType::Decimal {
                precision,
                scale: Some(scale),
            } => write!(f, "DECIMAL({}, {})", precision, scale),
            SqlType::Decimal {
                precision,
                scale: None,
            } => write!(f, "DECIMAL({})", precision),
            SqlType::Text => write!(f, "TEXT"),
        }
    }
}

/// Decides a single column type covering a column's observed values.
pub struct TypeUnifier;

impl TypeUnifier {
    /// Create a new unifier.
    pub fn new() -> Self {
        Self
    }

    /// Unify a non-empty value sequence under one column type.
    ///
    /// Returns `None` when no rule matches. The trailing `TEXT` fallback
    /// means that today only an empty sequence (a precondition violation)
    /// lands there; the branch is kept for future rule tightening.
    pub fn unify(&self, values: &[Value]) -> Option<SqlType> {
        if values.is_empty() {
            return None;
        }

        if all_kind(values, ValueKind::Float) {
            return Some(SqlType::DoublePrecision);
        }

        if all_kind(values, ValueKind::Int) {
            return Some(sized_integer(values));
        }

        if all_kind(values, ValueKind::Decimal) {
            return Some(sized_decimal(values));
        }

        if all_kind(values, ValueKind::Currency) {
            return Some(SqlType::Decimal {
                precision: 10,
                scale: Some(2),
            });
        }

        if all_kind(values, ValueKind::Rational) {
            // Precision-lossy: no rational column type exists in the
            // target schema language.
            return Some(SqlType::DoublePrecision);
        }

        Some(SqlType::Text)
    }
}

impl Default for TypeUnifier {
    fn default() -> Self {
        Self::new()
    }
}

fn all_kind(values: &[Value], kind: ValueKind) -> bool {
    values.iter().all(|v| v.kind() == kind)
}

/// Size an all-integer column by the bit-length of its largest absolute
/// value. Columns wider than 64 bits get an exact fixed-point type so the
/// declared schema never silently truncates.
fn sized_integer(values: &[Value]) -> SqlType {
    let max_abs = values
        .iter()
        .map(|v| match v {
            Value::Int(n) => n.unsigned_abs(),
            _ => 0,
        })
        .max()
        .unwrap_or(0);

    let bits = bit_length(max_abs);
    match bits {
        0..=16 => SqlType::SmallInt,
        17..=32 => SqlType::Integer,
        33..=64 => SqlType::BigInt,
        _ => SqlType::Decimal {
            precision: decimal_digits_for_bits(bits),
            scale: None,
        },
    }
}

/// Size an all-decimal column from the canonical string forms: widest
/// digit count left of the point, widest right of the point plus one
/// reserved digit of headroom.
fn sized_decimal(values: &[Value]) -> SqlType {
    let mut max_left = 0u32;
    let mut max_right = 0u32;

    for value in values {
        if let Value::Decimal(d) = value {
            let (left, right) = digit_widths(&d.to_string());
            max_left = max_left.max(left);
            max_right = max_right.max(right);
        }
    }

    let scale = max_right + 1;
    SqlType::Decimal {
        precision: max_left + scale,
        scale: Some(scale),
    }
}

/// Minimum bits needed to represent a magnitude (0 for 0).
fn bit_length(n: u128) -> u32 {
    128 - n.leading_zeros()
}

/// Decimal digits that hold any value of the given bit-length, plus one.
fn decimal_digits_for_bits(bits: u32) -> u32 {
    (f64::from(bits) * std::f64::consts::LOG10_2).ceil() as u32 + 1
}

/// Digit counts left and right of the point in a canonical decimal string
/// such as `-12.3450`.
fn digit_widths(canonical: &str) -> (u32, u32) {
    let (left, right) = match canonical.split_once('.') {
        Some((l, r)) => (l, r),
        None => (canonical, ""),
    };
    (count_digits(left), count_digits(right))
}

fn count_digits(s: &str) -> u32 {
    s.chars().filter(char::is_ascii_digit).count() as u32
}
