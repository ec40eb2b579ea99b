//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path segments arrive as strings so that malformed values surface as
//! structured `invalid_request` payloads instead of framework 404s.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
    InvalidDate,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a positive integer"))
        .with_value(ErrorCode::InvalidId, value)
}

/// Parse a store identifier from a path segment.
pub(crate) fn parse_id<T: From<i64>>(value: String, field: FieldName) -> Result<T, Error> {
    match value.parse::<i64>() {
        Ok(raw) if raw > 0 => Ok(T::from(raw)),
        _ => Err(invalid_id_error(field, &value)),
    }
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a date in YYYY-MM-DD form"))
        .with_value(ErrorCode::InvalidDate, value)
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| invalid_date_error(field, &value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode as ApiErrorCode, UserId};
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("id");

    #[test]
    fn parses_positive_identifiers() {
        let id: UserId = parse_id("42".to_owned(), FIELD).expect("valid id");
        assert_eq!(id, UserId::new(42));
    }

    #[rstest]
    #[case("abc")]
    #[case("0")]
    #[case("-3")]
    #[case("")]
    #[case("9223372036854775808")]
    fn rejects_malformed_identifiers(#[case] raw: &str) {
        let err = parse_id::<UserId>(raw.to_owned(), FIELD).expect_err("invalid id");

        assert_eq!(err.code(), ApiErrorCode::InvalidRequest);
        let details = err.details().expect("details present");
        assert_eq!(details["field"], "id");
        assert_eq!(details["value"], raw);
        assert_eq!(details["code"], "invalid_id");
    }

    #[test]
    fn parses_calendar_dates() {
        let date = parse_date("2024-03-15".to_owned(), FieldName::new("date")).expect("date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"));
    }

    #[rstest]
    #[case("15/03/2024")]
    #[case("2024-02-30")]
    #[case("2024-03-15T10:00:00Z")]
    fn rejects_other_date_shapes(#[case] raw: &str) {
        let err = parse_date(raw.to_owned(), FieldName::new("date")).expect_err("invalid date");

        let details = err.details().expect("details present");
        assert_eq!(details["code"], "invalid_date");
        assert_eq!(details["field"], "date");
    }
}
