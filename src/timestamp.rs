//! Second-resolution timestamps for stamping records when they are saved.

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Date time format for stored timestamps, e.g. "2021-01-01 00:00:00".
///
/// The format has no subsecond component, so a round trip through it drops
/// anything finer than a second.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Get the current UTC time truncated to whole seconds.
///
/// # Errors
///
/// Returns a [time::Error] if the current time cannot be formatted or parsed
/// with [TIMESTAMP_FORMAT].
pub fn current_timestamp() -> Result<OffsetDateTime, time::Error> {
    truncate_to_seconds(OffsetDateTime::now_utc())
}

/// Drop the subsecond part of `date_time` and convert it to UTC.
pub(crate) fn truncate_to_seconds(date_time: OffsetDateTime) -> Result<OffsetDateTime, time::Error> {
    // Use format instead of to_string so that single digit hours are zero padded.
    let formatted = date_time
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)?;

    Ok(PrimitiveDateTime::parse(&formatted, TIMESTAMP_FORMAT)?.assume_utc())
}
