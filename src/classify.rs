/// Maps a raw JSON value to a [`ValueKind`] tag. Total: every value
/// classifies, nothing fails.
///
/// The source data is JSON, which has no native date type, so dates and
/// numbers-as-strings are recovered heuristically from string content.
/// First match wins, and the order is load-bearing: `"true"` must be caught
/// before the generic string fallback, `""` before the numeric check, and
/// `"5"` must come out a number before the date parse could misfire.
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::tree::ValueKind;

pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Any,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(s) => classify_str(s),
        Value::Object(_) => ValueKind::Object,
        // Arrays carry no scalar identity of their own; the parser inspects
        // element 0 before asking. Empty arrays land here and stay unknown.
        Value::Array(_) => ValueKind::Any,
    }
}

fn classify_str(s: &str) -> ValueKind {
    if s == "true" || s == "false" {
        return ValueKind::Boolean;
    }
    if s.is_empty() {
        return ValueKind::String;
    }
    if s.parse::<f64>().is_ok() {
        return ValueKind::Number;
    }
    if parses_as_date(s) {
        return ValueKind::Date;
    }
    ValueKind::String
}

/// The calendar formats accepted as a `Date`. RFC 3339 covers the common
/// machine-generated timestamps; the others catch the usual human spellings.
fn parses_as_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
