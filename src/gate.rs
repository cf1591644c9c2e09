//! The pass-through validation gate.
//!
//! A [`Gate`] lifts a boolean validator into a fail-fast boundary adapter:
//! the candidate comes back unchanged on success, or as a generic
//! [`ValidationError`] on failure. No recovery, no coercion, no diagnostic
//! detail.

use crate::Value;
use crate::foundation::{Validate, ValidationError};

/// Wraps a validator into a success-or-error surface.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let gate = validate(natural());
/// assert_eq!(gate.check(json!(5)), Ok(json!(5)));
/// assert!(gate.check(json!(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate<V> {
    inner: V,
}

impl<V: Validate> Gate<V> {
    /// Creates a new `Gate` around a validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Checks a candidate, returning it unchanged when it conforms.
    ///
    /// # Errors
    ///
    /// Returns the generic [`ValidationError`] when the candidate does not
    /// conform; the value is dropped.
    pub fn check(&self, value: Value) -> Result<Value, ValidationError> {
        if self.inner.is_valid(&value) {
            Ok(value)
        } else {
            Err(ValidationError)
        }
    }

    /// Borrow-only form of [`check`](Gate::check) for callers that keep
    /// ownership of the candidate.
    ///
    /// # Errors
    ///
    /// Returns the generic [`ValidationError`] when the candidate does not
    /// conform.
    pub fn check_ref<'a>(&self, value: &'a Value) -> Result<&'a Value, ValidationError> {
        if self.inner.is_valid(value) {
            Ok(value)
        } else {
            Err(ValidationError)
        }
    }

    /// Returns a reference to the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the wrapped validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

/// Lifts a validator into a [`Gate`].
pub fn validate<V: Validate>(validator: V) -> Gate<V> {
    Gate::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
