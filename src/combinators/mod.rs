//! Combinators: higher-order validators built from other validators
//!
//! Structural combinators check named fields, elements, and positions
//! ([`Structure`], [`Partial`], [`List`], [`Tuple`]); logical combinators
//! compose verdicts ([`And`], [`Or`], [`Union`], [`Intersection`],
//! [`Maybe`]). All of them are themselves validators, so they nest freely.
//!
//! Evaluation is deterministic and left-to-right, short-circuiting at the
//! first determining sub-result: first failure for conjunctions and tuples,
//! first success for disjunctions.

pub mod and;
pub mod list;
pub mod maybe;
pub mod or;
pub mod partial;
pub mod predicate;
pub mod structure;
pub mod tuple;

pub use and::{And, Intersection, and, intersection};
pub use list::{List, any_list, list};
pub use maybe::{Maybe, maybe};
pub use or::{Or, Union, or, union};
pub use partial::{Partial, partial};
pub use predicate::{Predicate, predicate};
pub use structure::{Structure, structure};
pub use tuple::{Tuple, tuple};
