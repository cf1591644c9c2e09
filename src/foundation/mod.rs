//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Erasure**: [`BoxValidator`]
//! - **Errors**: [`ValidationError`]
//!
//! # Architecture
//!
//! The core is designed around a few principles:
//!
//! ## 1. Totality
//!
//! A validator is a *total* predicate over [`Value`](crate::Value): for any
//! input shape, including null, wrong-typed values, and absent object keys,
//! it returns a boolean and never panics.
//!
//! ## 2. Composition
//!
//! Validators compose with logical and structural combinators:
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let id = natural().or(natural_string());
//! assert!(id.is_valid(&json!(7)));
//! assert!(id.is_valid(&json!("7")));
//! assert!(!id.is_valid(&json!(-7)));
//! ```
//!
//! ## 3. One failure signal
//!
//! The only non-boolean surface is [`Gate::check`](crate::Gate::check),
//! which produces a single undifferentiated [`ValidationError`]. The core
//! is a shape gate, not a diagnostic reporter.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{BoxValidator, Validate, ValidateExt};
