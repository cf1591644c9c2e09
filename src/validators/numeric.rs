//! Numeric leaf validators
//!
//! All numeric comparisons happen on the `f64` number line, the numeric
//! domain of the JSON value universe. An `i64`/`u64` JSON number is always
//! integral; an `f64` one is integral when it is finite with no fractional
//! part, so `5.0` counts as an integer while `5.5` does not.

use crate::Value;

/// The integral value of a number, if it has one.
///
/// Returns `None` for non-numbers and for floats with a fractional part.
pub(crate) fn as_integral(value: &Value) -> Option<f64> {
    let n = value.as_number()?;
    if n.is_i64() || n.is_u64() {
        n.as_f64()
    } else {
        let f = n.as_f64()?;
        (f.is_finite() && f.fract() == 0.0).then_some(f)
    }
}

crate::validator! {
    /// Validates that a value is an integral number within an inclusive range.
    ///
    /// Use [`any_integer`] for the unbounded form.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = integer(1, 10);
    /// assert!(v.is_valid(&json!(5)));
    /// assert!(v.is_valid(&json!(10)));
    /// assert!(!v.is_valid(&json!(11)));
    /// assert!(!v.is_valid(&json!(5.5)));
    /// ```
    #[derive(Copy, PartialEq)]
    pub Integer { min: f64, max: f64 };
    rule(self, value) {
        as_integral(value).is_some_and(|n| n >= self.min && n <= self.max)
    }
}

/// Creates an [`Integer`] validator with inclusive bounds.
#[must_use]
pub fn integer(min: impl Into<f64>, max: impl Into<f64>) -> Integer {
    Integer::new(min.into(), max.into())
}

/// Creates an [`Integer`] validator with no bounds: any integral number.
#[must_use]
pub fn any_integer() -> Integer {
    Integer::new(f64::NEG_INFINITY, f64::INFINITY)
}

crate::validator! {
    /// Validates that a value is an integer strictly greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// assert!(natural().is_valid(&json!(1)));
    /// assert!(!natural().is_valid(&json!(0)));
    /// assert!(!natural().is_valid(&json!(-1)));
    /// ```
    pub Natural;
    rule(value) { as_integral(value).is_some_and(|n| n > 0.0) }
    fn natural();
}

crate::validator! {
    /// Validates that a value is any number within an inclusive range.
    ///
    /// No integrality requirement; both bounds are mandatory.
    #[derive(Copy, PartialEq)]
    pub Real { min: f64, max: f64 };
    rule(self, value) {
        value.as_f64().is_some_and(|n| n >= self.min && n <= self.max)
    }
}

/// Creates a [`Real`] validator with inclusive bounds.
#[must_use]
pub fn real(min: impl Into<f64>, max: impl Into<f64>) -> Real {
    Real::new(min.into(), max.into())
}

// ============================================================================
// TESTS
// ============================================================================
