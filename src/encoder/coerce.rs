//! Best-effort coercion of raw form values.
//!
//! Each function owns the fallback for one kind of field: malformed or missing input never fails,
//! it resolves to the documented default instead.
//!
//! Integer fallbacks parse into an `i64` with an optional sign: digit separators (`1_0`) and
//! values outside the `i64` range are not integers here and take the default.

use super::mapping::{self, CategoryTable};

/// Fallback for numeric fields.
pub const NUMERIC_DEFAULT: f64 = 0.0;

/// Fallback for integer coded fields.
pub const CODE_DEFAULT: i64 = 0;

const DEPENDENTS_OVERFLOW: &str = "3+";
const DEPENDENTS_OVERFLOW_CODE: i64 = 4;

const TRUTHY: [&str; 4] = ["1", "yes", "y", "true"];
const FALSY: [&str; 4] = ["0", "no", "n", "false"];

/// Parses a trimmed float. Absent, unparseable and non finite values become `0.0`.
pub fn coerce_numeric(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(NUMERIC_DEFAULT)
}

/// `"3+"` becomes `4`, anything else is parsed as an integer or falls back to `0`.
pub fn coerce_dependents(raw: Option<&str>) -> i64 {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw == DEPENDENTS_OVERFLOW {
        return DEPENDENTS_OVERFLOW_CODE;
    }

    parse_code(raw).unwrap_or(CODE_DEFAULT)
}

/// Case-insensitive yes/no style flags, then an integer parse, then `0`.
pub fn coerce_credit_history(raw: Option<&str>) -> i64 {
    let raw = raw.map(str::trim).unwrap_or_default();
    let lower = raw.to_lowercase();

    if TRUTHY.contains(&lower.as_str()) {
        1
    } else if FALSY.contains(&lower.as_str()) {
        0
    } else {
        parse_code(raw).unwrap_or(CODE_DEFAULT)
    }
}

/// Empty input is `0`. Known labels use `table`; otherwise the value is taken as an already
/// encoded class (no bounds check against the table), falling back to `0`.
pub fn coerce_categorical(raw: Option<&str>, table: CategoryTable) -> i64 {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return CODE_DEFAULT;
    }

    mapping::lookup(table, raw)
        .or_else(|| parse_code(raw))
        .unwrap_or(CODE_DEFAULT)
}

/// Signed decimal `i64` only, no underscores.
fn parse_code(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{mapping::table_for, Feature};

    #[test]
    fn numeric_parses_floats() {
        assert_eq!(coerce_numeric(Some("5000.5")), 5000.5);
        assert_eq!(coerce_numeric(Some("  120 ")), 120.0);
        assert_eq!(coerce_numeric(Some("-3")), -3.0);
    }

    #[test]
    fn numeric_defaults() {
        assert_eq!(coerce_numeric(None), 0.0);
        assert_eq!(coerce_numeric(Some("")), 0.0);
        assert_eq!(coerce_numeric(Some("   ")), 0.0);
        assert_eq!(coerce_numeric(Some("lots")), 0.0);
        assert_eq!(coerce_numeric(Some("inf")), 0.0);
        assert_eq!(coerce_numeric(Some("NaN")), 0.0);
    }

    #[test]
    fn dependents() {
        assert_eq!(coerce_dependents(Some("3+")), 4);
        assert_eq!(coerce_dependents(Some(" 3+ ")), 4);
        assert_eq!(coerce_dependents(Some("2")), 2);
        assert_eq!(coerce_dependents(Some("abc")), 0);
        assert_eq!(coerce_dependents(Some("1.5")), 0);
        assert_eq!(coerce_dependents(None), 0);
    }

    #[test]
    fn credit_history_truthy() {
        for raw in ["YES", "y", "1", "true", "True", " yes "] {
            assert_eq!(coerce_credit_history(Some(raw)), 1, "{raw}");
        }
    }

    #[test]
    fn credit_history_falsy() {
        for raw in ["no", "N", "0", "false", "FALSE"] {
            assert_eq!(coerce_credit_history(Some(raw)), 0, "{raw}");
        }
    }

    #[test]
    fn credit_history_fallbacks() {
        assert_eq!(coerce_credit_history(Some("maybe")), 0);
        assert_eq!(coerce_credit_history(Some("")), 0);
        assert_eq!(coerce_credit_history(None), 0);
        assert_eq!(coerce_credit_history(Some("2")), 2);
    }

    #[test]
    fn integer_fallback_is_limited_to_i64() {
        assert_eq!(coerce_dependents(Some("+2")), 2);
        assert_eq!(coerce_dependents(Some("99999999999999999999")), 0);
        assert_eq!(coerce_credit_history(Some("1_0")), 0);
    }

    #[test]
    fn categorical_empty_is_zero_for_every_table() {
        for feature in Feature::ALL {
            let Some(table) = table_for(feature) else {
                continue;
            };
            assert_eq!(coerce_categorical(Some(""), table), 0, "{feature:?}");
            assert_eq!(coerce_categorical(Some("  "), table), 0, "{feature:?}");
            assert_eq!(coerce_categorical(None, table), 0, "{feature:?}");
        }
    }

    #[test]
    fn categorical_lookup_then_preencoded_then_default() {
        let table = table_for(Feature::PropertyArea).unwrap();
        assert_eq!(coerce_categorical(Some("Urban"), table), 2);
        assert_eq!(coerce_categorical(Some(" Semiurban "), table), 1);
        assert_eq!(coerce_categorical(Some("1"), table), 1);
        // pre-encoded values are not checked against the table
        assert_eq!(coerce_categorical(Some("7"), table), 7);
        assert_eq!(coerce_categorical(Some("Unknown"), table), 0);
    }
}
