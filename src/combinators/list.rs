//! LIST combinator - homogeneous sequences with a length window

use crate::Value;
use crate::foundation::Validate;

/// Validates an array whose length lies within an inclusive window and
/// whose every element satisfies the item validator.
///
/// An empty array passes when `min` is zero. Element checks stop at the
/// first rejection.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = list(natural(), 1, 3);
/// assert!(v.is_valid(&json!([1, 2, 3])));
/// assert!(!v.is_valid(&json!([])));
/// assert!(!v.is_valid(&json!([1, 2, 3, 4])));
/// assert!(!v.is_valid(&json!([1, 0, 3])));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct List<V> {
    pub(crate) item: V,
    pub(crate) min: usize,
    pub(crate) max: usize,
}

impl<V> List<V> {
    /// Creates a new `List` combinator with inclusive length bounds.
    pub fn new(item: V, min: usize, max: usize) -> Self {
        Self { item, min, max }
    }

    /// Returns a reference to the item validator.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<V: Validate> Validate for List<V> {
    fn is_valid(&self, value: &Value) -> bool {
        value.as_array().is_some_and(|items| {
            items.len() >= self.min
                && items.len() <= self.max
                && items.iter().all(|item| self.item.is_valid(item))
        })
    }
}

/// Creates a [`List`] combinator with inclusive length bounds.
pub fn list<V: Validate>(item: V, min: usize, max: usize) -> List<V> {
    List::new(item, min, max)
}

/// Creates a [`List`] combinator with no length constraint.
pub fn any_list<V: Validate>(item: V) -> List<V> {
    List::new(item, 0, usize::MAX)
}

// ============================================================================
// TESTS
// ============================================================================
