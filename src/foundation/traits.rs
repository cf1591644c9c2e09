//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::Value;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is a pure, total predicate over [`Value`]: it must return a
/// boolean for *any* input shape and must never panic. Construction and
/// invocation are decoupled; a validator built once may be invoked
/// repeatedly and concurrently (the `Send + Sync` supertraits make that a
/// compile-time guarantee).
///
/// # Absent values
///
/// Object fields have a third state besides "valid value" and "invalid
/// value": the key may be absent entirely. [`is_valid_opt`] is that
/// channel. The default rejects absence; [`Maybe`](crate::combinators::Maybe)
/// and [`Anything`](crate::validators::Anything) override it to accept, and
/// the logical combinators distribute over it so that, e.g., a union
/// containing a `Maybe` still tolerates a missing key.
///
/// [`is_valid_opt`]: Validate::is_valid_opt
///
/// # Examples
///
/// ```
/// use shapecheck::foundation::Validate;
/// use serde_json::{Value, json};
///
/// struct NonEmptyString;
///
/// impl Validate for NonEmptyString {
///     fn is_valid(&self, value: &Value) -> bool {
///         value.as_str().is_some_and(|s| !s.is_empty())
///     }
/// }
///
/// let v = NonEmptyString;
/// assert!(v.is_valid(&json!("hello")));
/// assert!(!v.is_valid(&json!("")));
/// assert!(!v.is_valid(&json!(42)));
/// ```
pub trait Validate: Send + Sync {
    /// Checks a value that is present.
    ///
    /// Must be total: any input shape resolves to `true` or `false`,
    /// never a panic.
    fn is_valid(&self, value: &Value) -> bool;

    /// Checks a possibly-absent value (a missing object key).
    ///
    /// The default rejects `None` and delegates `Some` to [`is_valid`].
    /// Implementations that tolerate absence override this; wrapper types
    /// ([`BoxValidator`], references) must forward it so overrides survive
    /// erasure.
    ///
    /// [`is_valid`]: Validate::is_valid
    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        match value {
            Some(v) => self.is_valid(v),
            None => false,
        }
    }
}

// ============================================================================
// ERASED FORM
// ============================================================================

/// An owned, type-erased validator.
///
/// The heterogeneous combinators ([`Union`](crate::combinators::Union),
/// [`Intersection`](crate::combinators::Intersection),
/// [`Tuple`](crate::combinators::Tuple),
/// [`Structure`](crate::combinators::Structure),
/// [`Partial`](crate::combinators::Partial)) hold their children in this
/// form so that validators of different concrete types mix freely.
pub type BoxValidator = Box<dyn Validate>;

// Forwarding impls. Both methods are forwarded explicitly: forwarding only
// `is_valid` would silently reset a `Maybe`'s absent-key override back to
// the default once it is boxed or borrowed.

impl<V: Validate + ?Sized> Validate for &V {
    fn is_valid(&self, value: &Value) -> bool {
        (**self).is_valid(value)
    }

    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        (**self).is_valid_opt(value)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn is_valid(&self, value: &Value) -> bool {
        (**self).is_valid(value)
    }

    fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        (**self).is_valid_opt(value)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type, giving a fluent
/// API for composition.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let score = integer(0, 100).and(natural());
/// assert!(score.is_valid(&json!(42)));
/// assert!(!score.is_valid(&json!(0))); // not a natural
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both must accept for the combination to accept. Short-circuits on
    /// the first failure.
    fn and<V: Validate>(self, other: V) -> And<Self, V> {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one must accept. Short-circuits on the first success.
    fn or<V: Validate>(self, other: V) -> Or<Self, V> {
        Or::new(self, other)
    }

    /// Makes this validator tolerate null and absent values.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = natural().maybe();
    /// assert!(v.is_valid(&json!(null)));
    /// assert!(v.is_valid(&json!(3)));
    /// assert!(!v.is_valid(&json!(0)));
    /// ```
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }

    /// Erases the concrete type, for use in heterogeneous combinators.
    fn boxed(self) -> BoxValidator
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::maybe::Maybe;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
