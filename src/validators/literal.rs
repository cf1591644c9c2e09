//! Literal and universal validators

use crate::Value;
use crate::foundation::Validate;

/// Identity comparison for captured literals.
///
/// Defined for scalars only: numbers compare on the numeric line (so `1`
/// and `1.0` are the same value), and a sequence or mapping on either side
/// never matches. There is no deep structural comparison.
fn scalar_eq(literal: &Value, candidate: &Value) -> bool {
    match (literal, candidate) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => literal == candidate,
    }
}

// ============================================================================
// ANYTHING
// ============================================================================

/// The universal validator: accepts every value, present or absent.
///
/// A deliberate escape hatch for fields whose shape is somebody else's
/// problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anything;

impl Validate for Anything {
    fn is_valid(&self, _value: &Value) -> bool {
        true
    }

    fn is_valid_opt(&self, _value: Option<&Value>) -> bool {
        true
    }
}

/// Creates the universal [`Anything`] validator.
#[must_use]
pub const fn anything() -> Anything {
    Anything
}

// ============================================================================
// EXACTLY / ONE OF
// ============================================================================

crate::validator! {
    /// Validates that a value is identical to one captured literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = exactly("nw");
    /// assert!(v.is_valid(&json!("nw")));
    /// assert!(!v.is_valid(&json!("ne")));
    /// ```
    #[derive(PartialEq)]
    pub Exactly { literal: Value };
    rule(self, value) { scalar_eq(&self.literal, value) }
}

/// Creates an [`Exactly`] validator from a literal.
#[must_use]
pub fn exactly(literal: impl Into<Value>) -> Exactly {
    Exactly::new(literal.into())
}

crate::validator! {
    /// Validates that a value is identical to one of the captured literals.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = one_of(["debug", "info", "warn", "error"]);
    /// assert!(v.is_valid(&json!("warn")));
    /// assert!(!v.is_valid(&json!("trace")));
    /// ```
    #[derive(PartialEq)]
    pub OneOf { literals: Vec<Value> };
    rule(self, value) { self.literals.iter().any(|lit| scalar_eq(lit, value)) }
}

/// Creates a [`OneOf`] validator from a set of literals.
///
/// Mixed-type sets go through [`serde_json::json!`] values:
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = one_of([json!(0), json!("unset")]);
/// assert!(v.is_valid(&json!(0)));
/// assert!(v.is_valid(&json!("unset")));
/// ```
#[must_use]
pub fn one_of<I>(literals: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(literals.into_iter().map(Into::into).collect())
}

// ============================================================================
// TESTS
// ============================================================================
