//! STRUCTURE combinator - open structural object checks

use crate::Value;
use crate::foundation::{BoxValidator, Validate};

/// Validates an object against a set of declared fields.
///
/// The candidate must be an object and every *declared* field must be
/// accepted by its validator; a missing key is presented to the field
/// validator as an absent value, which rejects unless the validator
/// tolerates absence ([`Maybe`](crate::combinators::Maybe),
/// [`Anything`](crate::validators::Anything)). Keys present on the
/// candidate but not declared here are ignored: this is an open,
/// extensible check, not an exact-shape check. For the closed dual see
/// [`Partial`](crate::combinators::Partial).
///
/// Re-declaring a field name replaces the earlier validator.
///
/// Usually built with the [`structure!`](crate::structure) macro.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = structure! { "a" => natural() };
/// assert!(v.is_valid(&json!({"a": 1, "b": "extra"})));
/// assert!(!v.is_valid(&json!({"b": 1})));
/// assert!(!v.is_valid(&json!(null)));
/// ```
#[derive(Default)]
pub struct Structure {
    fields: Vec<(String, BoxValidator)>,
}

impl Structure {
    /// Creates an empty `Structure`, which accepts any object.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a field and the validator its value must satisfy.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        let name = name.into();
        let boxed: BoxValidator = Box::new(validator);
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = boxed;
        } else {
            self.fields.push((name, boxed));
        }
        self
    }

    /// Names of the declared fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Validate for Structure {
    fn is_valid(&self, value: &Value) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };
        self.fields
            .iter()
            .all(|(name, validator)| validator.is_valid_opt(map.get(name)))
    }
}

impl std::fmt::Debug for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Structure")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Creates an empty [`Structure`] to grow with [`Structure::field`].
#[must_use]
pub fn structure() -> Structure {
    Structure::new()
}

// ============================================================================
// TESTS
// ============================================================================
