//! Account registration input, its ordered validation rules and the
//! classification of server-side failures.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;
use zeroize::Zeroizing;

use crate::domain::errors::{ApiError, ApiErrorKind};

/// Minimum password length, counted the way the browser counts string length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Account created successfully! Welcome to MutualTracker!";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// First failing registration check. `Display` is the message shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    MissingName,
    MissingEmail,
    MissingPassword,
    PasswordTooShort { min: usize },
    InvalidEmail,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Please enter your full name"),
            Self::MissingEmail => write!(f, "Please enter your email address"),
            Self::MissingPassword => write!(f, "Please enter your password"),
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {min} characters long")
            }
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Raw form values as typed by the user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RegistrationInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Run the checks in order and stop at the first failure.
    ///
    /// Presence checks look at trimmed values; the request carries the values
    /// exactly as entered.
    pub fn validate(&self) -> Result<RegistrationRequest, RegistrationValidationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(RegistrationValidationError::MissingEmail);
        }
        if self.password.trim().is_empty() {
            return Err(RegistrationValidationError::MissingPassword);
        }
        if self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(RegistrationValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if !is_valid_email(&self.email) {
            return Err(RegistrationValidationError::InvalidEmail);
        }

        Ok(RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: Zeroizing::new(self.password.clone()),
        })
    }
}

/// Validated payload for the register endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl RegistrationRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Serialize)]
struct RegistrationBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl Serialize for RegistrationRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RegistrationBody {
            name: &self.name,
            email: &self.email,
            password: self.password(),
        }
        .serialize(serializer)
    }
}

/// How a rejected registration is reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationFailure {
    AlreadyExists,
    Network,
    Validation,
    Other(String),
}

impl RegistrationFailure {
    /// A kind other than the three recognised ones falls back to the message
    /// text before the message itself is shown.
    pub fn classify(error: &ApiError) -> Self {
        let kind = match error.kind() {
            kind @ (ApiErrorKind::AlreadyExists | ApiErrorKind::Network | ApiErrorKind::Validation) => kind,
            other => ApiErrorKind::from_message(error.message()).unwrap_or(other),
        };
        match kind {
            ApiErrorKind::AlreadyExists => Self::AlreadyExists,
            ApiErrorKind::Network => Self::Network,
            ApiErrorKind::Validation => Self::Validation,
            _ if error.message().trim().is_empty() => Self::Other("Registration failed".to_string()),
            _ => Self::Other(error.message().to_string()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::AlreadyExists => {
                "An account with this email already exists. Please try logging in instead."
            }
            Self::Network => "Network error. Please check your connection and try again.",
            Self::Validation => "Please check your input and try again.",
            Self::Other(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last@example.org", true)]
    #[case("a@b", false)]
    #[case("a b@example.com", false)]
    #[case("@example.com", false)]
    #[case("a@@example.com", false)]
    #[case("a\u{feff}b@c.de", false)]
    #[case("a@c\u{feff}.de", false)]
    fn email_pattern(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn debug_output_hides_password() {
        let input = RegistrationInput::new("Asha", "asha@example.com", "hunter22");
        assert!(!format!("{input:?}").contains("hunter22"));
        let request = input.validate().unwrap();
        assert!(!format!("{request:?}").contains("hunter22"));
    }

    #[test]
    fn request_serializes_all_fields() {
        let request = RegistrationInput::new("Asha", "asha@example.com", "hunter22")
            .validate()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Asha", "email": "asha@example.com", "password": "hunter22"})
        );
    }

    #[rstest]
    #[case(ApiErrorKind::Unknown, "E11000 duplicate key error", RegistrationFailure::AlreadyExists)]
    #[case(ApiErrorKind::Server, "user already exists", RegistrationFailure::AlreadyExists)]
    #[case(ApiErrorKind::Unknown, "Failed to fetch", RegistrationFailure::Network)]
    #[case(ApiErrorKind::Server, "validation failed: email", RegistrationFailure::Validation)]
    #[case(ApiErrorKind::Validation, "duplicate email", RegistrationFailure::Validation)]
    fn message_text_decides_unrecognised_kinds(
        #[case] kind: ApiErrorKind,
        #[case] message: &str,
        #[case] expected: RegistrationFailure,
    ) {
        assert_eq!(RegistrationFailure::classify(&ApiError::new(kind, message)), expected);
    }

    #[test]
    fn unclassified_failure_keeps_message() {
        let err = ApiError::new(ApiErrorKind::Server, "Database unavailable");
        assert_eq!(RegistrationFailure::classify(&err).message(), "Database unavailable");

        let blank = ApiError::new(ApiErrorKind::Unknown, "");
        assert_eq!(RegistrationFailure::classify(&blank).message(), "Registration failed");
    }
}
