//! Boolean validation

use crate::Value;

crate::validator! {
    /// Validates that a value is exactly a JSON boolean.
    ///
    /// No truthiness: `1`, `"true"`, and `null` are all rejected.
    pub Boolean;
    rule(value) { value.is_boolean() }
    fn boolean();
}
