//! Registration form checks.
//!
//! The session accepts any registration; these checks run before it is
//! called so that obviously broken input never reaches it.

use serde::Deserialize;
use std::fmt;

use crate::error::ValidationError;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Accepted phone number length range, in digits.
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Username,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        })
    }
}

/// Raw registration input as typed by the user.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check every field, returning all problems at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut reject = |field: RegistrationField, message: &'static str| {
            errors.push(ValidationError { field, message })
        };

        if self.username.trim().is_empty() {
            reject(RegistrationField::Username, "Username is required");
        }

        if self.email.trim().is_empty() {
            reject(RegistrationField::Email, "Email is required");
        } else if !looks_like_email(&self.email) {
            reject(RegistrationField::Email, "Email is invalid");
        }

        if self.phone_number.trim().is_empty() {
            reject(RegistrationField::PhoneNumber, "Phone number is required");
        } else {
            let digits = self.phone_number.chars().filter(char::is_ascii_digit).count();
            if !PHONE_DIGITS.contains(&digits) {
                reject(RegistrationField::PhoneNumber, "Phone number is invalid");
            }
        }

        // Length is counted in chars, so a character outside the BMP counts
        // once rather than as a surrogate pair.
        if self.password.is_empty() {
            reject(RegistrationField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            reject(
                RegistrationField::Password,
                "Password must be at least 6 characters",
            );
        }

        if self.password != self.confirm_password {
            reject(RegistrationField::ConfirmPassword, "Passwords do not match");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Some whitespace-free run of the form `a@b.c`.
fn looks_like_email(s: &str) -> bool {
    s.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            username: "newbie".into(),
            email: "newbie@example.com".into(),
            phone_number: "+1 (555) 123-4567".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    fn fields(form: &RegistrationForm) -> Vec<RegistrationField> {
        form.validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            [
                "Username is required",
                "Email is required",
                "Phone number is required",
                "Password is required",
            ]
        );
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("  a@b.co "));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.c"));
    }

    #[test]
    fn phone_counts_digits_only() {
        let mut form = valid_form();
        form.phone_number = "555-1234".into();
        assert_eq!(fields(&form), [RegistrationField::PhoneNumber]);
        form.phone_number = "1234567890123".into();
        assert_eq!(fields(&form), [RegistrationField::PhoneNumber]);
        form.phone_number = "123-456-7890".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn short_and_mismatched_passwords() {
        let mut form = valid_form();
        form.password = "abc".into();
        assert_eq!(
            fields(&form),
            [
                RegistrationField::Password,
                RegistrationField::ConfirmPassword
            ]
        );
    }

    #[test]
    fn password_length_counts_chars() {
        let mut form = valid_form();
        form.password = "🗳🗳🗳🗳🗳🗳".into();
        form.confirm_password = form.password.clone();
        assert!(form.validate().is_ok());

        form.password = "🗳🗳🗳".into();
        form.confirm_password = form.password.clone();
        assert_eq!(fields(&form), [RegistrationField::Password]);
    }

    #[test]
    fn deserializes_camel_case_input() {
        let form: RegistrationForm = serde_json::from_str(
            r#"{"username":"u","email":"u@x.io","phoneNumber":"5551234567","password":"secret1","confirmPassword":"secret1"}"#,
        )
        .unwrap();
        assert!(form.validate().is_ok());
    }
}
