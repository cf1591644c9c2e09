//! PARTIAL combinator - closed checks over present fields

use crate::Value;
use crate::foundation::{BoxValidator, Validate};

/// Validates an object in which every *present* key must be declared and
/// conformant, but no key is required.
///
/// The dual of [`Structure`](crate::combinators::Structure): `Structure`
/// demands coverage of its declared fields and ignores strangers, `Partial`
/// demands nothing but turns away strangers. An empty object is vacuously
/// conformant. The asymmetry is intentional; the classic use is a PATCH
/// body where any subset of known fields may arrive.
///
/// Usually built with the [`partial!`](crate::partial) macro.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let patch = partial! { "a" => natural() };
/// assert!(patch.is_valid(&json!({"a": 1})));
/// assert!(patch.is_valid(&json!({})));
/// assert!(!patch.is_valid(&json!({"c": 1})));
/// ```
#[derive(Default)]
pub struct Partial {
    fields: Vec<(String, BoxValidator)>,
}

impl Partial {
    /// Creates an empty `Partial`, which accepts only objects with no keys.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares an allowed field and the validator its value must satisfy
    /// when present.
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

    fn validator_for(&self, name: &str) -> Option<&BoxValidator> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

impl Validate for Partial {
    fn is_valid(&self, value: &Value) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };
        map.iter().all(|(key, present)| {
            self.validator_for(key)
                .is_some_and(|validator| validator.is_valid(present))
        })
    }
}

impl std::fmt::Debug for Partial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Partial")
            .field(
                "fields",
                &self.fields.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Creates an empty [`Partial`] to grow with [`Partial::field`].
#[must_use]
pub fn partial() -> Partial {
    Partial::new()
}

// ============================================================================
// TESTS
// ============================================================================
