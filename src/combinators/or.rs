//! OR combinator - logical disjunction of validators

use crate::Value;
use crate::foundation::{BoxValidator, Validate};

/// Combines two validators with logical OR.
///
/// At least one must accept; if the left one does, the right is never
/// evaluated. Order affects only evaluation cost, never the verdict.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let id = natural().or(natural_string());
/// assert!(id.is_valid(&json!(12)));
/// assert!(id.is_valid(&json!("12")));
/// assert!(!id.is_valid(&json!(-12)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    fn is_valid(&self, value: &Value) -> bool {
        self.left.is_valid(value) || self.right.is_valid(value)
    }

    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        self.left.is_valid_opt(value) || self.right.is_valid_opt(value)
    }
}

/// Creates an [`Or`] combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}

// ============================================================================
// N-ARY FORM
// ============================================================================

/// Combines any number of validators with logical OR.
///
/// Accepts as soon as one child accepts, left to right. An empty union
/// rejects everything.
///
/// Usually built with the [`union!`](crate::union) macro.
pub struct Union {
    validators: Vec<BoxValidator>,
}

impl Union {
    /// Creates a new `Union` from erased validators.
    #[must_use]
    pub fn new(validators: Vec<BoxValidator>) -> Self {
        Self { validators }
    }

    /// Number of child validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Union {
    fn is_valid(&self, value: &Value) -> bool {
        self.validators.iter().any(|v| v.is_valid(value))
    }

    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        self.validators.iter().any(|v| v.is_valid_opt(value))
    }
}

impl std::fmt::Debug for Union {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Union")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Creates a [`Union`] from erased validators.
#[must_use]
pub fn union(validators: Vec<BoxValidator>) -> Union {
    Union::new(validators)
}

// ============================================================================
// TESTS
// ============================================================================
