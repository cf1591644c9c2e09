//! Built-in leaf validators
//!
//! Leaf validators check a primitive property of a single value directly,
//! with no sub-validator dependencies.
//!
//! # Categories
//!
//! - **Numeric**: [`Integer`], [`Natural`], [`Real`]
//! - **String**: [`Text`], [`DecimalString`], [`NaturalString`],
//!   [`DateString`], [`Email`]
//! - **Literal**: [`Boolean`], [`Anything`], [`Exactly`], [`OneOf`]
//!
//! # Examples
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let age = integer(0, 130);
//! assert!(age.is_valid(&json!(36)));
//! assert!(!age.is_valid(&json!(36.5)));
//!
//! let status = one_of(["active", "disabled"]);
//! assert!(status.is_valid(&json!("active")));
//! assert!(!status.is_valid(&json!("deleted")));
//! ```

pub mod boolean;
pub mod literal;
pub mod numeric;
pub mod strings;
pub mod text;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::{Boolean, boolean};
pub use literal::{Anything, Exactly, OneOf, anything, exactly, one_of};
pub use numeric::{Integer, Natural, Real, any_integer, integer, natural, real};
pub use strings::{
    DateString, DecimalString, Email, NaturalString, date_string, decimal_string, email,
    natural_string,
};
pub use text::{Text, any_text, text};
