//! Input normalization helpers applied before any store round-trip.

use crate::error::CoreError;
use crate::types::{Date, DbId};

/// Boundary format for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim surrounding whitespace and lower-case an e-mail address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim `value` and reject it when nothing is left.
///
/// `message` becomes the [`CoreError::Validation`] text.
pub fn require_non_empty(value: &str, message: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Reject the nil UUID, which stands in for a missing identifier.
pub fn require_id(id: DbId, message: &str) -> Result<DbId, CoreError> {
    if id.is_nil() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(id)
}

/// Parse an optional `YYYY-MM-DD` due date.
///
/// `None` and blank strings mean "no due date".
pub fn parse_due_date(raw: Option<&str>) -> Result<Option<Date>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    Date::parse_from_str(raw, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| CoreError::Validation("due_date must be YYYY-MM-DD".into()))
}
