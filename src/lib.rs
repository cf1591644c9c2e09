//! # shapecheck
//!
//! Composable shape validators for dynamically typed JSON values.
//!
//! A validator is a pure predicate over [`serde_json::Value`]: it answers
//! "does this value have the expected shape" with a boolean, for *any* input
//! shape, without ever panicking. Validators compose into larger validators
//! with structural combinators (objects, lists, tuples) and logical
//! combinators (union, intersection, maybe), and a [`Gate`] turns a composed
//! validator into a fail-fast boundary that returns the value unchanged or a
//! generic [`ValidationError`](foundation::ValidationError).
//!
//! The intended habitat is a trust boundary: a decoded API request body, a
//! configuration document, anything whose shape is not statically known.
//!
//! ## Quick Start
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let user = structure! {
//!     "name" => text(1, 100),
//!     "age" => integer(0, 130),
//!     "email" => maybe(email()),
//! };
//!
//! assert!(user.is_valid(&json!({"name": "Ada", "age": 36})));
//! assert!(!user.is_valid(&json!({"name": "", "age": 36})));
//! assert!(!user.is_valid(&json!("not even an object")));
//! ```
//!
//! ## Gating a value
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let gate = validate(natural());
//! assert_eq!(gate.check(json!(5)), Ok(json!(5)));
//! assert!(gate.check(json!(-1)).is_err());
//! ```
//!
//! ## Defining leaf validators
//!
//! Use the [`validator!`] macro for zero-boilerplate leaves, or implement
//! [`Validate`](foundation::Validate) manually for anything stateful-looking.
//!
//! ## Built-in validators
//!
//! - **Numeric**: [`Integer`](validators::Integer), [`Natural`](validators::Natural),
//!   [`Real`](validators::Real)
//! - **String**: [`Text`](validators::Text), [`DecimalString`](validators::DecimalString),
//!   [`NaturalString`](validators::NaturalString), [`DateString`](validators::DateString),
//!   [`Email`](validators::Email)
//! - **Literal**: [`Boolean`](validators::Boolean), [`Anything`](validators::Anything),
//!   [`Exactly`](validators::Exactly), [`OneOf`](validators::OneOf)
//! - **Structural**: [`Structure`](combinators::Structure), [`Partial`](combinators::Partial),
//!   [`List`](combinators::List), [`Tuple`](combinators::Tuple)
//! - **Logical**: [`And`](combinators::And), [`Or`](combinators::Or),
//!   [`Maybe`](combinators::Maybe), [`Union`](combinators::Union),
//!   [`Intersection`](combinators::Intersection)

pub mod combinators;
pub mod foundation;
pub mod gate;
mod macros;
pub mod prelude;
pub mod validators;

pub use gate::{Gate, validate};

/// The dynamic value universe, re-exported for convenience.
pub use serde_json::Value;
