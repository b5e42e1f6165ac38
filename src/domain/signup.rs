//! Signup credentials and the registration request they map to.

use serde::Serialize;
use validator::Validate;

use crate::domain::forms::FieldErrors;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const GENERIC_SIGNUP_ERROR: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignupFormData {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password2: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Email,
    Password,
    Password2,
}

impl SignupFormData {
    pub fn new(email: impl Into<String>, password: impl Into<String>, password2: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password2: password2.into(),
        }
    }

    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::Password2 => self.password2 = value,
        }
    }

    /// Structural checks plus the confirmation cross-check, reported on
    /// `password2`. A mismatch takes precedence over a length message there.
    pub fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !self.password2.is_empty() && self.password != self.password2 {
            errors.insert("password2", PASSWORD_MISMATCH);
        }
        let trimmed = Self {
            email: self.email.trim().to_string(),
            ..self.clone()
        };
        if let Err(e) = Validate::validate(&trimmed) {
            errors.merge(FieldErrors::from(e));
        }
        errors
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest::from(self)
    }
}

/// Body sent to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub password2: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&SignupFormData> for RegistrationRequest {
    fn from(form: &SignupFormData) -> Self {
        let email = form.email.trim().to_string();
        Self {
            username: email.clone(),
            password: form.password.clone(),
            password2: form.password2.clone(),
            email,
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_email_is_reported() {
        let errors = SignupFormData::new("not-an-email", "abcdefgh", "abcdefgh").check();
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn mismatch_wins_over_length_on_confirmation() {
        let errors = SignupFormData::new("a@b.io", "abcdefgh", "abc").check();
        assert_eq!(errors.get("password2"), Some(PASSWORD_MISMATCH));
        assert!(!errors.contains("password"));
    }

    #[test]
    fn email_is_trimmed_and_used_as_username() {
        let request = SignupFormData::new("  trader@example.com ", "abcdefgh", "abcdefgh").to_request();
        assert_eq!(request.username, "trader@example.com");
        assert_eq!(request.email, "trader@example.com");
        assert!(request.first_name.is_empty() && request.last_name.is_empty());
    }
}
