//! Macros for declaring and composing validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — declare a complete leaf validator (struct + `Validate`
//!   impl + factory fn) from a boolean rule over a value
//! - [`structure!`] / [`partial!`] — field-map literals for the structural
//!   combinators
//! - [`tuple!`] — positional validator list
//! - [`union!`] / [`intersection!`] — N-ary logical composition
//!
//! # Examples
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let point = structure! {
//!     "pos" => tuple![real(-90, 90), real(-180, 180)],
//!     "label" => maybe(text(1, 32)),
//! };
//! assert!(point.is_valid(&json!({"pos": [48.85, 2.35]})));
//! assert!(!point.is_valid(&json!({"pos": [48.85]})));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a complete leaf validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// The rule block is the whole contract: a boolean expression over a
/// borrowed [`Value`](crate::Value). `#[derive(Debug, Clone)]` is always
/// applied; add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```
/// use shapecheck::{validator, foundation::Validate};
/// use serde_json::json;
///
/// validator! {
///     /// Accepts any JSON string.
///     pub AnyString;
///     rule(value) { value.is_string() }
///     fn any_string();
/// }
///
/// assert!(any_string().is_valid(&json!("x")));
/// assert!(!any_string().is_valid(&json!(1)));
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```
/// use shapecheck::{validator, foundation::Validate};
/// use serde_json::json;
///
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub Above { floor: f64 };
///     rule(self, value) { value.as_f64().is_some_and(|n| n > self.floor) }
///     fn above(floor: f64);
/// }
///
/// assert!(above(1.5).is_valid(&json!(2)));
/// assert!(!above(1.5).is_valid(&json!(1)));
/// ```
///
/// **Custom constructor** (overrides the auto `new`): for validators whose
/// constructor does more than capture its arguments.
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn is_valid(&self, $inp: &$crate::Value) -> bool $rule
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn is_valid(&$self_, $inp: &$crate::Value) -> bool $rule
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn is_valid(&$self_, $inp: &$crate::Value) -> bool $rule
        }
    };
}

// ============================================================================
// STRUCTURE / PARTIAL MACROS
// ============================================================================

/// Builds a [`Structure`](crate::combinators::Structure) from a field map.
///
/// Every declared field must be accepted; extra candidate keys are ignored.
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = structure! { "id" => natural(), "name" => text(1, 64) };
/// assert!(v.is_valid(&json!({"id": 1, "name": "a", "extra": true})));
/// assert!(!v.is_valid(&json!({"name": "a"})));
/// ```
#[macro_export]
macro_rules! structure {
    ($($name:expr => $validator:expr),* $(,)?) => {
        $crate::combinators::Structure::new()$(.field($name, $validator))*
    };
}

/// Builds a [`Partial`](crate::combinators::Partial) from a field map.
///
/// Every *present* candidate key must be declared and accepted; nothing is
/// required.
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let patch = partial! { "name" => text(1, 64), "age" => integer(0, 130) };
/// assert!(patch.is_valid(&json!({"age": 41})));
/// assert!(patch.is_valid(&json!({})));
/// assert!(!patch.is_valid(&json!({"nickname": "x"})));
/// ```
#[macro_export]
macro_rules! partial {
    ($($name:expr => $validator:expr),* $(,)?) => {
        $crate::combinators::Partial::new()$(.field($name, $validator))*
    };
}

// ============================================================================
// TUPLE MACRO
// ============================================================================

/// Builds a [`Tuple`](crate::combinators::Tuple) from positional validators.
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let pair = tuple![natural(), boolean()];
/// assert!(pair.is_valid(&json!([1, true])));
/// assert!(!pair.is_valid(&json!([1, true, 2])));
/// ```
#[macro_export]
macro_rules! tuple {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Tuple::new(::std::vec![
            $($crate::foundation::ValidateExt::boxed($validator)),+
        ])
    };
}

// ============================================================================
// UNION / INTERSECTION MACROS
// ============================================================================

/// Composes validators with N-ary OR logic.
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let id = union![natural(), natural_string()];
/// assert!(id.is_valid(&json!(7)));
/// assert!(id.is_valid(&json!("7")));
/// assert!(!id.is_valid(&json!(true)));
/// ```
#[macro_export]
macro_rules! union {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Union::new(::std::vec![
            $($crate::foundation::ValidateExt::boxed($validator)),+
        ])
    };
}

/// Composes validators with N-ary AND logic.
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = intersection![natural(), integer(1, 5)];
/// assert!(v.is_valid(&json!(3)));
/// assert!(!v.is_valid(&json!(6)));
/// ```
#[macro_export]
macro_rules! intersection {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Intersection::new(::std::vec![
            $($crate::foundation::ValidateExt::boxed($validator)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::Validate;
    use serde_json::json;

    // Unit validator
    validator! {
        /// A test unit validator.
        TestIsString;
        rule(value) { value.is_string() }
        fn test_is_string();
    }

    #[test]
    fn unit_validator() {
        let v = TestIsString;
        assert!(v.is_valid(&json!("hello")));
        assert!(!v.is_valid(&json!(1)));
    }

    #[test]
    fn unit_factory() {
        assert!(test_is_string().is_valid(&json!("x")));
    }

    // Struct with fields + auto new
    validator! {
        #[derive(Copy, PartialEq)]
        TestAtLeast { floor: f64 };
        rule(self, value) { value.as_f64().is_some_and(|n| n >= self.floor) }
        fn test_at_least(floor: f64);
    }

    #[test]
    fn struct_validator() {
        let v = TestAtLeast { floor: 3.0 };
        assert!(v.is_valid(&json!(3)));
        assert!(!v.is_valid(&json!(2)));
        assert!(!v.is_valid(&json!("3")));
    }

    #[test]
    fn struct_new_and_factory() {
        assert!(TestAtLeast::new(1.0).is_valid(&json!(1)));
        assert!(test_at_least(1.0).is_valid(&json!(5)));
    }

    // Custom constructor
    validator! {
        TestWindow { lo: usize, hi: usize };
        rule(self, value) {
            value.as_str().is_some_and(|s| s.len() >= self.lo && s.len() <= self.hi)
        }
        new(lo: usize, hi: usize) { Self { lo, hi } }
        fn test_window(lo: usize, hi: usize);
    }

    #[test]
    fn custom_new() {
        let v = test_window(1, 3);
        assert!(v.is_valid(&json!("ab")));
        assert!(!v.is_valid(&json!("")));
        assert!(!v.is_valid(&json!("abcd")));
        assert_eq!(TestWindow::new(2, 4).lo, 2);
    }

    // Composition macros agree with their builder forms
    #[test]
    fn structure_macro_matches_builder() {
        use crate::combinators::Structure;
        use crate::validators::{natural, text};

        let from_macro = structure! { "id" => natural(), "name" => text(1, 8) };
        let from_builder = Structure::new()
            .field("id", natural())
            .field("name", text(1, 8));

        for candidate in [
            json!({"id": 1, "name": "a"}),
            json!({"id": 0, "name": "a"}),
            json!({"name": "a"}),
            json!(null),
        ] {
            assert_eq!(
                from_macro.is_valid(&candidate),
                from_builder.is_valid(&candidate)
            );
        }
    }

    #[test]
    fn union_macro_short_circuits_to_any() {
        use crate::validators::{boolean, natural};

        let v = union![natural(), boolean()];
        assert!(v.is_valid(&json!(true)));
        assert!(v.is_valid(&json!(2)));
        assert!(!v.is_valid(&json!("no")));
    }

    #[test]
    fn intersection_macro_requires_all() {
        use crate::validators::{integer, natural};

        let v = intersection![natural(), integer(1, 5)];
        assert!(v.is_valid(&json!(3)));
        assert!(!v.is_valid(&json!(6)));
        assert!(!v.is_valid(&json!(0)));
    }

    #[test]
    fn tuple_macro_positional() {
        use crate::validators::{boolean, natural};

        let v = tuple![natural(), boolean()];
        assert!(v.is_valid(&json!([1, true])));
        assert!(!v.is_valid(&json!([true, 1])));
    }
}
