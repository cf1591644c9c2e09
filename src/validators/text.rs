//! String length validation

use crate::Value;

crate::validator! {
    /// Validates that a value is a string whose character count lies within
    /// an inclusive window.
    ///
    /// Length is counted in Unicode scalar values, not bytes. Use
    /// [`any_text`] for the unconstrained form.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = text(1, 8);
    /// assert!(v.is_valid(&json!("hello")));
    /// assert!(!v.is_valid(&json!("")));
    /// assert!(!v.is_valid(&json!("too long for this")));
    /// assert!(!v.is_valid(&json!(42)));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Text { min: usize, max: usize };
    rule(self, value) {
        value.as_str().is_some_and(|s| {
            let len = s.chars().count();
            len >= self.min && len <= self.max
        })
    }
    fn text(min: usize, max: usize);
}

/// Creates a [`Text`] validator accepting any string at all.
#[must_use]
pub fn any_text() -> Text {
    Text::new(0, usize::MAX)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn window_is_inclusive() {
        let v = text(2, 4);
        assert!(!v.is_valid(&json!("a")));
        assert!(v.is_valid(&json!("ab")));
        assert!(v.is_valid(&json!("abcd")));
        assert!(!v.is_valid(&json!("abcde")));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // four characters, twelve bytes
        let v = text(4, 4);
        assert!(v.is_valid(&json!("日本語だ")));
    }

    #[test]
    fn rejects_non_strings() {
        let v = any_text();
        assert!(v.is_valid(&json!("")));
        assert!(!v.is_valid(&json!(3)));
        assert!(!v.is_valid(&json!(null)));
        assert!(!v.is_valid(&json!(["a"])));
    }
}
