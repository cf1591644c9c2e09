//! Prelude module for convenient imports.
//!
//! A single `use shapecheck::prelude::*;` brings in the trait pair, every
//! built-in validator and combinator, the gate, and the composition macros.
//!
//! # Examples
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let v = structure! {
//!     "id" => natural(),
//!     "tags" => list(text(1, 16), 0, 8),
//! };
//! assert!(validate(v).check(json!({"id": 3, "tags": []})).is_ok());
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{BoxValidator, Validate, ValidateExt, ValidationError};

// ============================================================================
// GATE
// ============================================================================

pub use crate::gate::{Gate, validate};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::combinators::*;
#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// MACROS AND THE VALUE UNIVERSE
// ============================================================================

pub use crate::{intersection, partial, structure, tuple, union, validator};

pub use crate::Value;
