//! MAYBE combinator - optional-but-typed values

use crate::Value;
use crate::foundation::Validate;

/// Makes a validator tolerate null and absent values.
///
/// Accepts `null`, a missing object key, or anything the inner validator
/// accepts. This is the optional-but-typed field: present values still have
/// to conform.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = maybe(natural());
/// assert!(v.is_valid(&json!(null)));
/// assert!(v.is_valid(&json!(5)));
/// assert!(!v.is_valid(&json!(0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maybe<V> {
    pub(crate) inner: V,
}

impl<V> Maybe<V> {
    /// Creates a new `Maybe` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Maybe<V> {
    fn is_valid(&self, value: &Value) -> bool {
        value.is_null() || self.inner.is_valid(value)
    }

    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        match value {
            None => true,
            Some(v) => self.is_valid(v),
        }
    }
}

/// Creates a [`Maybe`] combinator around a validator.
pub fn maybe<V: Validate>(validator: V) -> Maybe<V> {
    Maybe::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::natural;
    use serde_json::json;

    #[test]
    fn accepts_null() {
        assert!(maybe(natural()).is_valid(&json!(null)));
    }

    #[test]
    fn accepts_absent() {
        assert!(maybe(natural()).is_valid_opt(None));
    }

    #[test]
    fn present_values_must_conform() {
        let v = maybe(natural());
        assert!(v.is_valid(&json!(5)));
        assert!(!v.is_valid(&json!(0)));
        assert!(!v.is_valid(&json!("5")));
    }

    #[test]
    fn nests() {
        let v = maybe(maybe(natural()));
        assert!(v.is_valid(&json!(null)));
        assert!(v.is_valid(&json!(1)));
        assert!(!v.is_valid(&json!(-1)));
    }

    #[test]
    fn inner_round_trip() {
        let v = maybe(natural());
        assert!(v.inner().is_valid(&json!(1)));
        assert!(v.into_inner().is_valid(&json!(1)));
    }
}
