use serde::{Deserialize, Serialize};
use std::fmt;

pub const FORMAT_UPDATE_LIMIT_NEGATIVE: &str = "FORMAT_UPDATE_LIMIT_NEGATIVE";
pub const FORMAT_INCIDENT_FIELD_MISSING: &str = "FORMAT_INCIDENT_FIELD_MISSING";
pub const FORMAT_TIMEZONE_INVALID: &str = "FORMAT_TIMEZONE_INVALID";
pub const TIMEZONE_UNKNOWN: &str = "TIMEZONE_UNKNOWN";
pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

/// Structured error returned by every fallible formatter, config and catalog call.
///
/// `code` is stable and meant for callers to match on; `message` is for humans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "[{}] {} ({details})", self.code, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for AppError {}
