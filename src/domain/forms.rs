//! Field-level validation results shared by every form.

use std::collections::BTreeMap;
use validator::ValidationErrors;

/// First error message per field. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
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

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Errors restricted to the given fields.
    pub fn only(&self, fields: &[&str]) -> FieldErrors {
        FieldErrors(
            self.0
                .iter()
                .filter(|(field, _)| fields.contains(&field.as_str()))
                .map(|(field, message)| (field.clone(), message.clone()))
                .collect(),
        )
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    /// Errors for nested entries, keyed `prefix.field`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(format!("{}.{}", prefix, field), message);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", first.code));
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("password2", "Passwords do not match");
        errors.insert("password2", "Too short");
        assert_eq!(errors.get("password2"), Some("Passwords do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn only_filters_to_requested_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("assetName", "Pick an asset");
        errors.insert("frequency", "Must be at least 1");
        let step = errors.only(&["assetName"]);
        assert!(step.contains("assetName"));
        assert!(!step.contains("frequency"));
    }
}
