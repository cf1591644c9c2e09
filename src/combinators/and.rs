//! AND combinator - logical conjunction of validators

use crate::Value;
use crate::foundation::{BoxValidator, Validate};

/// Combines two validators with logical AND.
///
/// Both validators must accept for the combination to accept; evaluation
/// stops at the first rejection.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = natural().and(integer(1, 5));
/// assert!(v.is_valid(&json!(3)));
/// assert!(!v.is_valid(&json!(6)));
/// assert!(!v.is_valid(&json!(0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn is_valid(&self, value: &Value) -> bool {
        self.left.is_valid(value) && self.right.is_valid(value)
    }

    // Distributes over absence so wrapped Maybe children keep their say.
    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        self.left.is_valid_opt(value) && self.right.is_valid_opt(value)
    }
}

/// Creates an [`And`] combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}

// ============================================================================
// N-ARY FORM
// ============================================================================

/// Combines any number of validators with logical AND.
///
/// Every child must accept; evaluation short-circuits at the first
/// rejection, left to right. An empty intersection accepts everything.
///
/// Usually built with the [`intersection!`](crate::intersection) macro.
pub struct Intersection {
    validators: Vec<BoxValidator>,
}

impl Intersection {
    /// Creates a new `Intersection` from erased validators.
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

impl Validate for Intersection {
    fn is_valid(&self, value: &Value) -> bool {
        self.validators.iter().all(|v| v.is_valid(value))
    }

    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        self.validators.iter().all(|v| v.is_valid_opt(value))
    }
}

impl std::fmt::Debug for Intersection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Intersection")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Creates an [`Intersection`] from erased validators.
#[must_use]
pub fn intersection(validators: Vec<BoxValidator>) -> Intersection {
    Intersection::new(validators)
}

// ============================================================================
// TESTS
// ============================================================================
