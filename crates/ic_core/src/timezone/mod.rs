use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::error::{AppError, TIMEZONE_UNKNOWN};

/// Display timezone chosen by the caller.
///
/// `offset` uses the "minutes behind UTC" convention: US Eastern standard time is `300`,
/// Central European time is `-60`. No daylight-saving rules are applied; pick the EDT
/// entry instead of EST when summer time is in effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timezone {
    #[serde(default)]
    pub name: String,
    pub abbreviation: String,
    pub offset: i64,
}

impl Timezone {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, offset: i64) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            offset,
        }
    }
}

/// Offset of `value` in the same convention as [`Timezone::offset`].
pub fn local_offset_minutes(value: OffsetDateTime) -> i64 {
    -i64::from(value.offset().whole_minutes())
}

/// Seconds to subtract from the local wall clock, saturating on overflow.
fn shift_seconds(target_offset: i64, local_offset: i64) -> i64 {
    match target_offset.checked_sub(local_offset) {
        Some(delta) => delta.saturating_mul(60),
        None if target_offset < 0 => i64::MIN,
        None => i64::MAX,
    }
}

/// Render `value` as a 12-hour clock time in `timezone`, e.g. `2:05 PM EST`.
///
/// The conversion is linear offset arithmetic: the difference between the target offset and
/// the value's own offset is subtracted from the wall clock. There is no tz database lookup,
/// so historical DST boundaries render exactly as the offsets say.
///
/// Offsets too large for the calendar clamp to its first or last representable instant.
pub fn format_time(value: OffsetDateTime, timezone: &Timezone) -> String {
    let shift = shift_seconds(timezone.offset, local_offset_minutes(value));
    let shifted = value.saturating_sub(Duration::seconds(shift));

    let hour = shifted.hour();
    let minute = shifted.minute();
    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!(
        "{display_hour}:{minute:02} {period} {}",
        timezone.abbreviation
    )
}

/// Fixed list of zones offered for chat output, in display order.
///
/// A representative set of common zones, not an exhaustive or authoritative list.
pub fn catalog() -> Vec<Timezone> {
    vec![
        Timezone::new("Coordinated Universal Time", "UTC", 0),
        Timezone::new("Greenwich Mean Time", "GMT", 0),
        Timezone::new("British Summer Time", "BST", -60),
        Timezone::new("Central European Time", "CET", -60),
        Timezone::new("Central European Summer Time", "CEST", -120),
        Timezone::new("India Standard Time", "IST", -330),
        Timezone::new("Eastern Standard Time", "EST", 300),
        Timezone::new("Eastern Daylight Time", "EDT", 240),
        Timezone::new("Central Standard Time", "CST", 360),
        Timezone::new("Central Daylight Time", "CDT", 300),
        Timezone::new("Mountain Standard Time", "MST", 420),
        Timezone::new("Mountain Daylight Time", "MDT", 360),
        Timezone::new("Pacific Standard Time", "PST", 480),
        Timezone::new("Pacific Daylight Time", "PDT", 420),
        Timezone::new("Alaska Standard Time", "AKST", 540),
        Timezone::new("Alaska Daylight Time", "AKDT", 480),
        Timezone::new("Hawaii-Aleutian Standard Time", "HST", 600),
    ]
}

/// Case-insensitive lookup by abbreviation.
pub fn find_timezone(abbreviation: &str) -> Result<Timezone, AppError> {
    let wanted = abbreviation.trim();
    catalog()
        .into_iter()
        .find(|tz| tz.abbreviation.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            AppError::new(TIMEZONE_UNKNOWN, "Unknown timezone abbreviation")
                .with_details(format!("abbreviation={wanted}"))
        })
}
