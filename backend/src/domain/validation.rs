//! Field checks shared by the booking and content services.
//!
//! Every failure is an [`ErrorCode::InvalidRequest`](super::ErrorCode) error
//! whose message names the field and whose details carry
//! `{ "field": ..., "code": ... }`.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use super::Error;
use super::messages::{MessageKey, Messages};

/// Detail code for absent or blank fields.
pub const MISSING_FIELD: &str = "missing_field";
/// Detail code for unparseable calendar dates.
pub const INVALID_DATE: &str = "invalid_date";

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar day.
///
/// Timestamps are reduced to their UTC date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use temple_backend::domain::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 6, 1);
/// assert_eq!(parse_calendar_date("2025-06-01"), expected);
/// assert_eq!(parse_calendar_date("2025-06-01T23:30:00+07:00"), expected);
/// assert_eq!(parse_calendar_date("01/06/2025"), None);
/// ```
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|stamp| stamp.with_timezone(&Utc).date_naive())
    })
}

/// Error for an absent or blank field.
pub(crate) fn missing_field(messages: Messages, field: &str) -> Error {
    Error::invalid_request(messages.missing_field(field))
        .with_details(json!({ "field": field, "code": MISSING_FIELD }))
}

/// Error for a field carrying an unexpected value.
pub(crate) fn invalid_field(messages: Messages, field: &str, key: MessageKey, code: &str) -> Error {
    Error::invalid_request(messages.text(key)).with_details(json!({ "field": field, "code": code }))
}

/// Require a non-blank string, returning it trimmed.
pub(crate) fn required_text(
    messages: Messages,
    field: &str,
    value: Option<String>,
) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_owned()),
        _ => Err(missing_field(messages, field)),
    }
}

/// Require a calendar date in one of the accepted formats.
pub(crate) fn required_date(
    messages: Messages,
    field: &str,
    value: Option<&str>,
) -> Result<NaiveDate, Error> {
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field(messages, field))?;
    parse_calendar_date(raw)
        .ok_or_else(|| invalid_field(messages, field, MessageKey::InvalidDate, INVALID_DATE))
}

/// Validate an optional patch string: absent is fine, blank is not.
pub(crate) fn optional_text(
    messages: Messages,
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, Error> {
    value
        .map(|text| required_text(messages, field, Some(text)))
        .transpose()
}
