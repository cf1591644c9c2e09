//! The validation failure signal.

use thiserror::Error;

/// The undifferentiated failure returned by [`Gate::check`](crate::Gate::check).
///
/// Carries no field path, no expected-vs-actual detail, no nested causes.
/// Validators themselves answer with a boolean; this type exists only so the
/// gate's failure branch is a first-class [`std::error::Error`] that callers
/// can propagate with `?`. Callers needing diagnostics must probe individual
/// sub-validators themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("validation failed")]
pub struct ValidationError;
