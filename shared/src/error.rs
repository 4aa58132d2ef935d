//! Field-level validation errors
//!
//! Every client-side form validation in the portal produces a
//! [`FieldErrors`] map: field key -> human-readable message. A form is
//! submittable exactly when the map is empty, and the set of keys is the
//! set of fields the user still has to fix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered map of form field -> validation message.
///
/// Keys use the wire spelling of the field (`businessName`,
/// `couponTitle`, ...) so pages can highlight inputs without a second
/// mapping layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The last message for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field keys in stable (sorted) order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Drop the error recorded for `field`, if any. Pages call this when
    /// the user starts editing the offending input.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_means_valid() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn keys_are_exact_and_stable() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "Phone number is required");
        errors.insert("email", "Email is required");
        errors.insert("email", "Invalid email format");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["email", "phone"]);
    }

    #[test]
    fn clearing_a_field_removes_only_that_field() {
        let mut errors = FieldErrors::new();
        errors.insert("city", "City is required");
        errors.insert("postalCode", "Postal code is required");
        errors.clear_field("city");

        assert!(!errors.contains("city"));
        assert!(errors.contains("postalCode"));
    }
}
