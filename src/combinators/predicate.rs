//! PREDICATE combinator - validators from plain functions

use crate::Value;
use crate::foundation::Validate;

/// Wraps a plain boolean function as a validator.
///
/// The escape hatch for one-off checks that do not deserve a named type.
/// The function must uphold the validator contract itself: total over any
/// input shape, no panics.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::{Value, json};
///
/// let even = predicate(|v: &Value| v.as_i64().is_some_and(|n| n % 2 == 0));
/// assert!(even.is_valid(&json!(4)));
/// assert!(!even.is_valid(&json!(3)));
/// assert!(!even.is_valid(&json!("4")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F> {
    check: F,
}

impl<F> Predicate<F> {
    /// Creates a new `Predicate` from a boolean function.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn is_valid(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

/// Creates a [`Predicate`] validator from a boolean function.
pub fn predicate<F>(check: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Predicate::new(check)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::natural;
    use serde_json::json;

    #[test]
    fn wraps_a_function() {
        let v = predicate(|v: &Value| v.as_str().is_some_and(|s| s.starts_with("ok")));
        assert!(v.is_valid(&json!("ok then")));
        assert!(!v.is_valid(&json!("nope")));
        assert!(!v.is_valid(&json!(1)));
    }

    #[test]
    fn composes_like_any_validator() {
        let small_even = predicate(|v: &Value| v.as_i64().is_some_and(|n| n % 2 == 0))
            .and(natural());
        assert!(small_even.is_valid(&json!(2)));
        assert!(!small_even.is_valid(&json!(3)));
        assert!(!small_even.is_valid(&json!(0)));
    }
}
