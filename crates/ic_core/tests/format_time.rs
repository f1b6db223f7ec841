use ic_core::error::TIMEZONE_UNKNOWN;
use ic_core::timezone::{catalog, find_timezone, format_time, Timezone};
use time::macros::datetime;

fn tz(abbreviation: &str, offset: i64) -> Timezone {
    Timezone::new("", abbreviation, offset)
}

#[test]
fn afternoon_time_in_same_offset() {
    let value = datetime!(2026-01-14 14:05 UTC);
    assert_eq!(format_time(value, &tz("EST", 0)), "2:05 PM EST");
}

#[test]
fn midnight_and_noon_render_as_twelve() {
    assert_eq!(
        format_time(datetime!(2026-01-14 00:00 UTC), &tz("UTC", 0)),
        "12:00 AM UTC"
    );
    assert_eq!(
        format_time(datetime!(2026-01-14 12:00 UTC), &tz("UTC", 0)),
        "12:00 PM UTC"
    );
    assert_eq!(
        format_time(datetime!(2026-01-14 23:59 UTC), &tz("UTC", 0)),
        "11:59 PM UTC"
    );
    assert_eq!(
        format_time(datetime!(2026-01-14 11:07 UTC), &tz("UTC", 0)),
        "11:07 AM UTC"
    );
}

#[test]
fn shifts_by_offset_difference() {
    // 19:05 UTC is 2:05 PM in EST (five hours behind).
    let value = datetime!(2026-01-14 19:05 UTC);
    assert_eq!(format_time(value, &tz("EST", 300)), "2:05 PM EST");

    // Same instant observed from a +02:00 clock.
    let value = datetime!(2026-01-14 21:05 +2);
    assert_eq!(format_time(value, &tz("EST", 300)), "2:05 PM EST");

    // Eastward: 19:05 UTC is 00:35 next day in IST.
    let value = datetime!(2026-01-14 19:05 UTC);
    assert_eq!(format_time(value, &tz("IST", -330)), "12:35 AM IST");
}

#[test]
fn offset_is_applied_literally_without_dst_rules() {
    // A July instant rendered with the standard-time offset stays on standard time.
    let value = datetime!(2026-07-04 16:30 UTC);
    assert_eq!(format_time(value, &tz("EST", 300)), "11:30 AM EST");
    assert_eq!(format_time(value, &tz("EDT", 240)), "12:30 PM EDT");
}

#[test]
fn minutes_are_zero_padded() {
    let value = datetime!(2026-01-14 09:03 UTC);
    assert_eq!(format_time(value, &tz("UTC", 0)), "9:03 AM UTC");
}

#[test]
fn repeated_calls_agree_and_leave_input_unchanged() {
    let value = datetime!(2026-01-14 19:05 -5);
    let copy = value;
    let zone = tz("PST", 480);
    let first = format_time(value, &zone);
    let second = format_time(value, &zone);
    assert_eq!(first, second);
    assert_eq!(first, "4:05 PM PST");
    assert_eq!(value, copy);
}

#[test]
fn catalog_lookup_is_case_insensitive() {
    let edt = find_timezone("edt").expect("edt");
    assert_eq!(edt.abbreviation, "EDT");
    assert_eq!(edt.offset, 240);
    assert_eq!(find_timezone(" UTC ").expect("utc").offset, 0);

    let err = find_timezone("XYZ").unwrap_err();
    assert_eq!(err.code, TIMEZONE_UNKNOWN);
    assert!(catalog().iter().any(|t| t.abbreviation == "EST" && t.offset == 300));
}

#[test]
fn extreme_offsets_clamp_to_calendar_edges() {
    // Shifting far into the past lands on the first instant (midnight).
    let value = datetime!(2026-01-14 14:05 UTC);
    assert_eq!(format_time(value, &tz("X", i64::MAX / 2)), "12:00 AM X");
    assert_eq!(format_time(value, &tz("X", 10_000_000_000)), "12:00 AM X");

    // Shifting far into the future lands on the last instant of a day.
    let value = datetime!(2026-01-14 14:05 +1);
    assert_eq!(format_time(value, &tz("X", i64::MIN)), "11:59 PM X");
    let value = datetime!(2026-01-14 14:05 -5);
    assert_eq!(format_time(value, &tz("X", i64::MIN)), "11:59 PM X");
}
