//! The closed tagged-value model for observed cell values.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

// Literal patterns compiled once on first use.

static RATIONAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+)\s*/\s*(-?\d+)$").unwrap() // 3/4, -7/2
});

static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+\.\d+$").unwrap() // 1.25, -0.007
});

/// One observed cell value.
///
/// Every value a record carries is tagged with exactly one of these
/// variants, so a column's type can be decided by checking which variant
/// all of its values share.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Floating-point number.
    Float(f64),
    /// Integer (widest native representation).
    Int(i128),
    /// Exact decimal.
    Decimal(Decimal),
    /// Exact rational as a numerator/denominator pair.
    Rational { numer: i64, denom: i64 },
    /// Text, including currency-marked strings such as `$19.99`.
    Text(String),
}

/// The category a value occupies during type unification.
///
/// Mostly one kind per variant; currency-marked text is split out from
/// plain text because it unifies under its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Float,
    Int,
    Decimal,
    Currency,
    Rational,
    Text,
}

impl Value {
    /// Classify raw cell text into a tagged value.
    ///
    /// Tried in order: integer literal, rational literal (`n/d` with a
    /// nonzero denominator), decimal literal, anything else `f64` can
    /// parse (scientific notation, `inf`, `nan`). Everything remaining
    /// stays text; currency strings are deliberately left as text and
    /// recognized by [`Value::kind`] instead.
    pub fn classify(raw: &str) -> Value {
        let trimmed = raw.trim();

        if let Ok(n) = trimmed.parse::<i128>() {
            return Value::Int(n);
        }

        if let Some(caps) = RATIONAL_PATTERN.captures(trimmed) {
            let numer = caps[1].parse::<i64>();
            let denom = caps[2].parse::<i64>();
            if let (Ok(numer), Ok(denom)) = (numer, denom) {
                if denom != 0 {
                    return Value::Rational { numer, denom };
                }
            }
        }

        if DECIMAL_PATTERN.is_match(trimmed) {
            if let Ok(d) = trimmed.parse::<Decimal>() {
                return Value::Decimal(d);
            }
            // Too many digits for an exact decimal; fall through to float.
        }

        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }

        Value::Text(raw.to_string())
    }

    /// The unification category of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Int(_) => ValueKind::Int,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Rational { .. } => ValueKind::Rational,
            Value::Text(s) if s.starts_with('$') => ValueKind::Currency,
            Value::Text(_) => ValueKind::Text,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer() {
        assert_eq!(Value::classify("42"), Value::Int(42));
        assert_eq!(Value::classify("-17"), Value::Int(-17));
        assert_eq!(Value::classify(" 5 "), Value::Int(5));
    }

    #[test]
    fn test_classify_decimal() {
        assert_eq!(
            Value::classify("1.25"),
            Value::Decimal("1.25".parse().unwrap())
        );
        assert_eq!(
            Value::classify("-0.007"),
            Value::Decimal("-0.007".parse().unwrap())
        );
    }

    #[test]
    fn test_classify_float() {
        assert_eq!(Value::classify("1.5e3"), Value::Float(1500.0));
        assert_eq!(Value::classify("inf"), Value::Float(f64::INFINITY));
    }

    #[test]
    fn test_classify_rational() {
        assert_eq!(
            Value::classify("3/4"),
            Value::Rational { numer: 3, denom: 4 }
        );
        assert_eq!(
            Value::classify("-7 / 2"),
            Value::Rational { numer: -7, denom: 2 }
        );
    }

    #[test]
    fn test_classify_rational_zero_denominator_is_text() {
        assert_eq!(Value::classify("1/0"), Value::Text("1/0".to_string()));
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(Value::classify("hello"), Value::Text("hello".to_string()));
        assert_eq!(Value::classify(""), Value::Text(String::new()));
    }

    #[test]
    fn test_currency_kind() {
        assert_eq!(Value::classify("$19.99").kind(), ValueKind::Currency);
        assert_eq!(Value::classify("19.99").kind(), ValueKind::Decimal);
        assert_eq!(
            Value::Text("price".to_string()).kind(),
            ValueKind::Text
        );
    }

    #[test]
    fn test_oversized_integer_falls_back_to_float() {
        // 45 digits, beyond i128
        let v = Value::classify("999999999999999999999999999999999999999999999");
        assert_eq!(v.kind(), ValueKind::Float);
    }
}
