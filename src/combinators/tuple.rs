//! TUPLE combinator - fixed-arity positional sequences

use crate::Value;
use crate::foundation::{BoxValidator, Validate};

/// Validates an array of exactly the declared arity, element *i* against
/// validator *i*.
///
/// A length mismatch rejects before any element check runs; element checks
/// stop at the first rejection.
///
/// Usually built with the [`tuple!`](crate::tuple) macro.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let pair = tuple![natural(), boolean()];
/// assert!(pair.is_valid(&json!([1, true])));
/// assert!(!pair.is_valid(&json!([true, 1])));
/// assert!(!pair.is_valid(&json!([1, true, 2])));
/// ```
pub struct Tuple {
    items: Vec<BoxValidator>,
}

impl Tuple {
    /// Creates a new `Tuple` from positional validators.
    #[must_use]
    pub fn new(items: Vec<BoxValidator>) -> Self {
        Self { items }
    }

    /// The declared arity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for the zero-arity tuple, which accepts only the empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Validate for Tuple {
    fn is_valid(&self, value: &Value) -> bool {
        let Some(items) = value.as_array() else {
            return false;
        };
        if items.len() != self.items.len() {
            return false;
        }
        self.items
            .iter()
            .zip(items)
            .all(|(validator, item)| validator.is_valid(item))
    }
}

impl std::fmt::Debug for Tuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tuple").field("arity", &self.items.len()).finish()
    }
}

/// Creates a [`Tuple`] from positional validators.
#[must_use]
pub fn tuple(items: Vec<BoxValidator>) -> Tuple {
    Tuple::new(items)
}

// ============================================================================
// TESTS
// ============================================================================
