use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, CONFIG_INVALID, CONFIG_PARSE_FAILED, CONFIG_READ_FAILED};
use crate::message::DisplayMode;
use crate::timezone::{find_timezone, Timezone};

pub const DEFAULT_TIMELINE_BASE_URL: &str = "https://bennadel.github.io/Incident-Commander/#";
pub const DEFAULT_UPDATE_LIMIT: i64 = 5;
pub const DEFAULT_TIMEZONE: &str = "EST";

/// Formatter settings, stored as JSON next to the rest of the incident tracker's settings.
///
/// Every field is optional in the JSON document; missing fields take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatterConfig {
    /// Prefix joined directly with the incident id to build the timeline link.
    pub timeline_base_url: String,
    pub default_update_limit: i64,
    pub display_mode: DisplayMode,
    /// Abbreviation of a catalog timezone.
    pub timezone: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timeline_base_url: DEFAULT_TIMELINE_BASE_URL.to_string(),
            default_update_limit: DEFAULT_UPDATE_LIMIT,
            display_mode: DisplayMode::Compact,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl FormatterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: FormatterConfig = serde_json::from_str(json).map_err(|e| {
            AppError::new(CONFIG_PARSE_FAILED, "Failed to parse formatter config JSON")
                .with_details(e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AppError::new(CONFIG_PARSE_FAILED, "Failed to encode formatter config JSON")
                .with_details(e.to_string())
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeline_base_url.trim().is_empty() {
            warn!("formatter config rejected: blank timeline_base_url");
            return Err(AppError::new(
                CONFIG_INVALID,
                "timeline_base_url is required",
            ));
        }
        if self.default_update_limit < 0 {
            warn!(
                default_update_limit = self.default_update_limit,
                "formatter config rejected: negative update limit"
            );
            return Err(AppError::new(
                CONFIG_INVALID,
                "default_update_limit must be >= 0",
            )
            .with_details(format!("value={}", self.default_update_limit)));
        }
        if let Err(e) = find_timezone(&self.timezone) {
            warn!(timezone = %self.timezone, "formatter config rejected: unknown timezone");
            return Err(e);
        }
        Ok(())
    }

    pub fn resolve_timezone(&self) -> Result<Timezone, AppError> {
        find_timezone(&self.timezone)
    }
}

/// Read and validate a JSON config file.
pub fn load_config(path: &Path) -> Result<FormatterConfig, AppError> {
    let text = fs::read_to_string(path).map_err(|e| read_error(path, &e))?;
    FormatterConfig::from_json_str(&text)
}

/// Transient I/O failures are marked retryable; missing or unreadable files are not.
fn read_error(path: &Path, err: &io::Error) -> AppError {
    let retryable = matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    );
    AppError::new(CONFIG_READ_FAILED, "Failed to read formatter config")
        .with_details(format!("path={}; err={err}", path.display()))
        .with_retryable(retryable)
}
