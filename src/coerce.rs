//! Numeric coercion for loosely typed input
//!
//! Form submissions deliver every field as text, sometimes empty, sometimes
//! missing altogether. [`to_number`] turns any such value into an `f64` and
//! substitutes zero for anything it cannot read, so a bad field can never
//! poison a downstream total. [`loose_add`] reproduces the untyped `+`
//! operator whose string-concatenation behaviour caused the original bug.

use std::fmt;

/// A value of unknown shape, as it arrives from an untyped source
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Field missing entirely
    Undefined,

    /// Explicit null
    Null,

    /// Already numeric
    Number(f64),

    /// Textual representation, possibly numeric
    Text(String),

    /// Boolean flag
    Bool(bool),

    /// Any structured value (array, map)
    Object,
}

impl RawValue {
    /// Runtime type label of this value
    pub fn type_tag(&self) -> &'static str {
        match self {
            RawValue::Undefined => "undefined",
            RawValue::Null | RawValue::Object => "object",
            RawValue::Number(_) => "number",
            RawValue::Text(_) => "string",
            RawValue::Bool(_) => "boolean",
        }
    }

    /// Text form this value takes when concatenated
    pub fn display(&self) -> String {
        match self {
            RawValue::Undefined => "undefined".to_string(),
            RawValue::Null => "null".to_string(),
            RawValue::Number(n) => display_number(*n),
            RawValue::Text(s) => s.clone(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Object => "[object Object]".to_string(),
        }
    }

    fn is_textual(&self) -> bool {
        matches!(self, RawValue::Text(_) | RawValue::Object)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Render a number the way loose concatenation would.
///
/// Plain decimal notation between `1e-6` and `1e21`, exponent form outside.
pub fn display_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // drops the sign of -0.0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form always carries a sign: 1e+21, 1e-7
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        format!("{}", n)
    }
}

/// Conversion into [`RawValue`]
pub trait ToRaw {
    fn to_raw(&self) -> RawValue;
}

impl ToRaw for RawValue {
    fn to_raw(&self) -> RawValue {
        self.clone()
    }
}

impl ToRaw for f64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Number(*self)
    }
}

impl ToRaw for f32 {
    fn to_raw(&self) -> RawValue {
        RawValue::Number(f64::from(*self))
    }
}

impl ToRaw for i32 {
    fn to_raw(&self) -> RawValue {
        RawValue::Number(f64::from(*self))
    }
}

impl ToRaw for u32 {
    fn to_raw(&self) -> RawValue {
        RawValue::Number(f64::from(*self))
    }
}

impl ToRaw for i64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Number(*self as f64)
    }
}

impl ToRaw for u64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Number(*self as f64)
    }
}

impl ToRaw for bool {
    fn to_raw(&self) -> RawValue {
        RawValue::Bool(*self)
    }
}

impl ToRaw for str {
    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.to_string())
    }
}

impl ToRaw for String {
    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.clone())
    }
}

impl<T: ToRaw + ?Sized> ToRaw for &T {
    fn to_raw(&self) -> RawValue {
        (**self).to_raw()
    }
}

impl<T: ToRaw> ToRaw for Option<T> {
    fn to_raw(&self) -> RawValue {
        match self {
            Some(v) => v.to_raw(),
            None => RawValue::Undefined,
        }
    }
}

impl ToRaw for serde_json::Value {
    fn to_raw(&self) -> RawValue {
        use serde_json::Value;
        match self {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(*b),
            // Out-of-range numbers have no f64 form
            Value::Number(n) => n.as_f64().map_or(RawValue::Number(f64::NAN), RawValue::Number),
            Value::String(s) => RawValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => RawValue::Object,
        }
    }
}

/// Coerce any value to a number, defaulting to zero.
///
/// Absent values, empty or non-numeric text, `NaN`, booleans and structured
/// values all become `0.0`. Numbers, infinities included, pass through
/// unchanged. The function never fails.
pub fn to_number<V: ToRaw + ?Sized>(value: &V) -> f64 {
    match value.to_raw() {
        RawValue::Number(n) if !n.is_nan() => n,
        RawValue::Text(s) => parse_numeric_text(&s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Strictly parse numeric text; `None` for anything unreadable or `NaN`.
///
/// Overflowing literals (`1e400`) and the spelling `Infinity` yield an
/// infinity; the shorthands `inf`/`infinity` accepted by `f64::from_str` do not.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let n = trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())?;
    if n.is_infinite() {
        let unsigned = trimmed.trim_start_matches(['+', '-']);
        if unsigned != "Infinity" && !unsigned.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some(n)
}

/// Untyped `+`: joins as text if either side is textual, sums otherwise
pub fn loose_add(lhs: &RawValue, rhs: &RawValue) -> RawValue {
    if lhs.is_textual() || rhs.is_textual() {
        RawValue::Text(format!("{}{}", lhs.display(), rhs.display()))
    } else {
        RawValue::Number(to_number(lhs) + to_number(rhs))
    }
}

/// Fold values left to right with [`loose_add`]
pub fn loose_sum<I, V>(values: I) -> RawValue
where
    I: IntoIterator<Item = V>,
    V: ToRaw,
{
    let mut iter = values.into_iter();
    let first = match iter.next() {
        Some(v) => v.to_raw(),
        None => return RawValue::Number(0.0),
    };
    iter.fold(first, |acc, v| loose_add(&acc, &v.to_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_default_to_zero() {
        assert_eq!(to_number(&RawValue::Null), 0.0);
        assert_eq!(to_number(&RawValue::Undefined), 0.0);
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(to_number(&None::<f64>), 0.0);
    }

    #[test]
    fn test_parses_numeric_text() {
        assert_eq!(to_number("60000"), 60000.0);
        assert_eq!(to_number(" 12.5 "), 12.5);
        assert_eq!(to_number("-3"), -3.0);
        assert_eq!(to_number("1e3"), 1000.0);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        assert_eq!(to_number("abc"), 0.0);
        assert_eq!(to_number("12abc"), 0.0);
        assert_eq!(to_number("158,000"), 0.0);
        assert_eq!(to_number("NaN"), 0.0);
        assert_eq!(to_number("inf"), 0.0);
    }

    #[test]
    fn test_nan_becomes_zero_infinity_passes() {
        assert_eq!(to_number(&f64::NAN), 0.0);
        assert_eq!(to_number(&f64::INFINITY), f64::INFINITY);
        assert_eq!(to_number(&f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(to_number(&to_number(&f64::INFINITY)), f64::INFINITY);
    }

    #[test]
    fn test_infinite_text() {
        assert_eq!(to_number("1e400"), f64::INFINITY);
        assert_eq!(to_number("-1e400"), f64::NEG_INFINITY);
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(to_number("infinity"), 0.0);
    }

    #[test]
    fn test_loose_add_concatenates_text() {
        let out = loose_add(&RawValue::Text("600".into()), &RawValue::Number(5.0));
        assert_eq!(out, RawValue::Text("6005".into()));
        assert_eq!(out.type_tag(), "string");

        let out = loose_add(&RawValue::Number(1.0), &RawValue::Number(2.5));
        assert_eq!(out, RawValue::Number(3.5));
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(60000.0), "60000");
        assert_eq!(display_number(0.5), "0.5");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(1.5e21), "1.5e+21");
        assert_eq!(display_number(1e-7), "1e-7");
        assert_eq!(display_number(-2.5e-7), "-2.5e-7");
        assert_eq!(display_number(1e20), "100000000000000000000");
        assert_eq!(display_number(0.000001), "0.000001");
    }
}
