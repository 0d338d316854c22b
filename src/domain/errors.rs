use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Failure category reported by the API layer.
///
/// Parsed from the `code` field of an error body (several server spellings
/// map onto one kind) or derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    #[strum(to_string = "already_exists", serialize = "duplicate", serialize = "conflict")]
    AlreadyExists,
    #[strum(to_string = "validation", serialize = "validation_error", serialize = "invalid_request")]
    Validation,
    #[strum(to_string = "unauthorized", serialize = "forbidden")]
    Unauthorized,
    #[strum(to_string = "not_found")]
    NotFound,
    #[strum(to_string = "network")]
    Network,
    #[strum(to_string = "server", serialize = "internal_error")]
    Server,
    #[strum(to_string = "decode")]
    Decode,
    #[strum(to_string = "unknown")]
    Unknown,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            409 => Self::AlreadyExists,
            400 | 422 => Self::Validation,
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Parse a server error code, ignoring codes this client does not know.
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().parse().ok()
    }

    /// Recognise a failure from its message text. Checked in order:
    /// "already exists" or "duplicate", then "network" or "fetch", then
    /// "validation". Matching is case-sensitive.
    pub fn from_message(message: &str) -> Option<Self> {
        if message.contains("already exists") || message.contains("duplicate") {
            Some(Self::AlreadyExists)
        } else if message.contains("network") || message.contains("fetch") {
            Some(Self::Network)
        } else if message.contains("validation") {
            Some(Self::Validation)
        } else {
            None
        }
    }
}

/// Error returned by every API port: a kind for the client to branch on and a
/// human-readable message for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl std::error::Error for ApiError {}

/// Root error type for the application
#[derive(Debug, Clone)]
pub enum AppError {
    Configuration(String),
    Browser(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("already_exists", ApiErrorKind::AlreadyExists)]
    #[case("duplicate", ApiErrorKind::AlreadyExists)]
    #[case("DUPLICATE", ApiErrorKind::AlreadyExists)]
    #[case("validation_error", ApiErrorKind::Validation)]
    #[case("invalid_request", ApiErrorKind::Validation)]
    #[case("internal_error", ApiErrorKind::Server)]
    fn known_codes_parse(#[case] code: &str, #[case] expected: ApiErrorKind) {
        assert_eq!(ApiErrorKind::from_code(code), Some(expected));
    }

    #[rstest]
    #[case("User already exists", Some(ApiErrorKind::AlreadyExists))]
    #[case("E11000 duplicate key error", Some(ApiErrorKind::AlreadyExists))]
    #[case("network unreachable", Some(ApiErrorKind::Network))]
    #[case("Failed to fetch", Some(ApiErrorKind::Network))]
    #[case("validation failed: email", Some(ApiErrorKind::Validation))]
    #[case("duplicate validation entry", Some(ApiErrorKind::AlreadyExists))]
    #[case("Network Error", None)]
    #[case("Internal Server Error", None)]
    fn message_text_maps_to_kind(#[case] message: &str, #[case] expected: Option<ApiErrorKind>) {
        assert_eq!(ApiErrorKind::from_message(message), expected);
    }

    #[test]
    fn unknown_code_is_ignored() {
        assert_eq!(ApiErrorKind::from_code("teapot"), None);
    }

    #[rstest]
    #[case(409, ApiErrorKind::AlreadyExists)]
    #[case(422, ApiErrorKind::Validation)]
    #[case(403, ApiErrorKind::Unauthorized)]
    #[case(404, ApiErrorKind::NotFound)]
    #[case(503, ApiErrorKind::Server)]
    #[case(418, ApiErrorKind::Unknown)]
    fn status_maps_to_kind(#[case] status: u16, #[case] expected: ApiErrorKind) {
        assert_eq!(ApiErrorKind::from_status(status), expected);
    }

    #[test]
    fn display_uses_canonical_code() {
        assert_eq!(ApiErrorKind::AlreadyExists.to_string(), "already_exists");
        let err = ApiError::network("offline");
        assert_eq!(err.to_string(), "offline (network)");
    }
}
