use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FormatterConfig;
use crate::domain::{Incident, Update};
use crate::error::{
    AppError, FORMAT_INCIDENT_FIELD_MISSING, FORMAT_TIMEZONE_INVALID,
    FORMAT_UPDATE_LIMIT_NEGATIVE,
};
use crate::timezone::{format_time, Timezone};

/// Block-quote prefix understood by the chat client. Kept with its trailing space.
pub const QUOTE_MARKER: &str = "> ";

/// How timeline updates are laid out in the message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DisplayMode {
    /// One quoted line per update, no spacing.
    #[default]
    Compact,
    /// An empty quoted line between updates.
    Readable,
}

impl DisplayMode {
    /// `"readable"` selects [`DisplayMode::Readable`]; anything else is compact.
    pub fn parse(value: &str) -> Self {
        if value == "readable" {
            DisplayMode::Readable
        } else {
            DisplayMode::Compact
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Compact => "compact",
            DisplayMode::Readable => "readable",
        }
    }
}

impl From<String> for DisplayMode {
    fn from(value: String) -> Self {
        DisplayMode::parse(&value)
    }
}

impl From<&str> for DisplayMode {
    fn from(value: &str) -> Self {
        DisplayMode::parse(value)
    }
}

fn check_inputs(
    incident: &Incident,
    update_limit: i64,
    timezone: &Timezone,
) -> Result<(), AppError> {
    if update_limit < 0 {
        return Err(AppError::new(
            FORMAT_UPDATE_LIMIT_NEGATIVE,
            "Update limit must be zero or greater",
        )
        .with_details(format!("update_limit={update_limit}")));
    }

    for (field, value) in [
        ("id", &incident.id),
        ("priority.id", &incident.priority.id),
        ("status.id", &incident.status.id),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::new(
                FORMAT_INCIDENT_FIELD_MISSING,
                format!("Incident {field} is required"),
            )
            .with_details(format!("incident_id={}", incident.id)));
        }
    }

    if timezone.abbreviation.trim().is_empty() {
        return Err(AppError::new(
            FORMAT_TIMEZONE_INVALID,
            "Timezone abbreviation is required",
        )
        .with_details(format!("offset={}", timezone.offset)));
    }

    Ok(())
}

fn update_line(update: &Update, timezone: &Timezone) -> String {
    format!(
        "{QUOTE_MARKER}*{} [ {} ]*: \u{2014} {}",
        format_time(update.created_at, timezone),
        update.status.id,
        update.description
    )
}

/// Render an incident as a chat message: header fields, then the most recent
/// `update_limit` updates as quoted lines.
///
/// Layout (lines joined with `\n`, no trailing newline):
/// - six header lines;
/// - an empty line when at least one update is shown;
/// - a "N update(s) not being shown" line plus an empty quote line when updates are hidden;
/// - the shown updates oldest first, separated by empty quote lines in readable mode.
pub fn format_incident_message(
    incident: &Incident,
    update_limit: i64,
    display_mode: DisplayMode,
    timezone: &Timezone,
    timeline_base_url: &str,
) -> Result<String, AppError> {
    check_inputs(incident, update_limit, timezone)?;

    let limit = usize::try_from(update_limit).unwrap_or(usize::MAX);
    let (visible, hidden) = incident.recent_updates(limit);

    let mut parts = vec![
        format!("*Incident Description*: {}", incident.description),
        format!("*Priority*: {}", incident.priority.id),
        format!(
            "*Start of Customer Impact*: {}",
            format_time(incident.started_at, timezone)
        ),
        format!("*Zoom or Hangout link*: `{}` ", incident.video_link),
        format!("*Status*: {}", incident.status.id),
        format!("*Timeline*: `{timeline_base_url}{}` ", incident.id),
    ];

    if !visible.is_empty() {
        parts.push(String::new());
    }

    if hidden > 0 {
        parts.push(format!(
            "{QUOTE_MARKER}_.... *{hidden} update(s)* not being shown._"
        ));
        parts.push(QUOTE_MARKER.to_string());
    }

    for (i, update) in visible.iter().enumerate() {
        if display_mode == DisplayMode::Readable && i != 0 {
            parts.push(QUOTE_MARKER.to_string());
        }
        parts.push(update_line(update, timezone));
    }

    debug!(
        incident_id = %incident.id,
        shown = visible.len(),
        hidden,
        mode = display_mode.as_str(),
        timezone = %timezone.abbreviation,
        "formatted incident chat message"
    );

    Ok(parts.join("\n"))
}

/// Formatter bound to a configuration, for callers that post the same way every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackSerializer {
    config: FormatterConfig,
}

impl SlackSerializer {
    pub fn from_config(config: FormatterConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn serialize(
        &self,
        incident: &Incident,
        update_limit: i64,
        display_mode: DisplayMode,
        timezone: &Timezone,
    ) -> Result<String, AppError> {
        format_incident_message(
            incident,
            update_limit,
            display_mode,
            timezone,
            &self.config.timeline_base_url,
        )
    }

    /// Serialize with the configured limit, display mode and timezone.
    pub fn serialize_with_defaults(&self, incident: &Incident) -> Result<String, AppError> {
        let timezone = self.config.resolve_timezone()?;
        self.serialize(
            incident,
            self.config.default_update_limit,
            self.config.display_mode,
            &timezone,
        )
    }
}
