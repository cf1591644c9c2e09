//! String format validators
//!
//! Regex-backed leaves compile their pattern once into a static. The email
//! shape is deliberately permissive rather than RFC 5322-complete; it gates
//! obvious garbage, nothing more.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::Value;

static DECIMAL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^-?[0-9]+\.?[0-9]*?$").unwrap());

static NATURAL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]+$").unwrap());

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9._+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").unwrap());

/// Parse attempts, in order. Any hit counts as a date.
fn parses_as_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
}

// ============================================================================
// DECIMAL / NATURAL STRINGS
// ============================================================================

crate::validator! {
    /// Validates a string rendering of a decimal number: an optional leading
    /// minus, one or more digits, an optional point with trailing digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// assert!(decimal_string().is_valid(&json!("-12.5")));
    /// assert!(decimal_string().is_valid(&json!("42")));
    /// assert!(!decimal_string().is_valid(&json!("1.2.3")));
    /// assert!(!decimal_string().is_valid(&json!(12.5)));
    /// ```
    pub DecimalString;
    rule(value) { value.as_str().is_some_and(|s| DECIMAL_REGEX.is_match(s)) }
    fn decimal_string();
}

crate::validator! {
    /// Validates a string of one or more digits: no sign, no decimal point.
    pub NaturalString;
    rule(value) { value.as_str().is_some_and(|s| NATURAL_REGEX.is_match(s)) }
    fn natural_string();
}

// ============================================================================
// DATE STRING
// ============================================================================

crate::validator! {
    /// Validates a date-like string: at least ten characters long and
    /// parseable as a calendar date or timestamp.
    ///
    /// Any format the parsing routine understands is accepted; the length
    /// floor is what rules out fragments like `"2024"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// assert!(date_string().is_valid(&json!("2024-01-15")));
    /// assert!(date_string().is_valid(&json!("2024-01-15T10:30:00Z")));
    /// assert!(!date_string().is_valid(&json!("2024-13-99")));
    /// assert!(!date_string().is_valid(&json!("2024")));
    /// ```
    pub DateString;
    rule(value) {
        value
            .as_str()
            .is_some_and(|s| s.chars().count() >= 10 && parses_as_date(s))
    }
    fn date_string();
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates email shape: a permissive local part (letters, digits,
    /// `._+-`), an `@`, and a domain containing at least one dot.
    pub Email;
    rule(value) { value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)) }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
