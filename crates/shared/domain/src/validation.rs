//! Business-rule validation shared by the stores and the HTTP boundary.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::constants::{
    DATE_FORMAT, DESCRIPTION_TOO_LONG, INVALID_DATE, INVALID_EMAIL, MAX_DESCRIPTION_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Accepted shape for birth and founding dates.
///
/// Only months 01-09, 11 and 12 match; this is the pattern clients have
/// always been held to.
pub static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(17|18|19|20)\d{2}-(0[1-9]|1[1,2])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("date pattern is a valid regex")
});

/// Check a `yyyy-mm-dd` string against [`DATE_PATTERN`] and parse it.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    if !DATE_PATTERN.is_match(raw) {
        return Err(DomainError::precondition_failed(INVALID_DATE));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DomainError::precondition_failed(INVALID_DATE))
}

/// Reject addresses that are not valid email addresses.
pub fn ensure_email(email: &str) -> DomainResult<()> {
    if String::from(email).validate_email() {
        Ok(())
    } else {
        Err(DomainError::precondition_failed(INVALID_EMAIL))
    }
}

/// Reject descriptions longer than [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn ensure_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::precondition_failed(DESCRIPTION_TOO_LONG));
    }
    Ok(())
}

/// Parse an opaque record id.
///
/// Ids are generated as UUIDs, so anything else cannot name a stored record
/// and is reported with the caller's not-found message.
pub fn parse_id(raw: &str, not_found: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found(not_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MEMBER_NOT_FOUND;

    #[test]
    fn test_parse_date_accepts_pattern() {
        let date = parse_date("1995-12-31").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1995, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_bad_shapes() {
        for raw in ["95-12-31", "1995/12/31", "1600-01-01", "2001-13-01", "2001-01-32", ""] {
            let err = parse_date(raw).unwrap_err();
            assert_eq!(err, DomainError::precondition_failed(INVALID_DATE), "{raw}");
        }
    }

    #[test]
    fn test_parse_date_rejects_october() {
        assert!(parse_date("2001-10-05").is_err());
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        // Matches the pattern but is not a calendar date
        assert!(parse_date("2001-02-30").is_err());
    }

    #[test]
    fn test_ensure_email() {
        assert!(ensure_email("ana@example.com").is_ok());
        assert_eq!(
            ensure_email("not-an-email").unwrap_err(),
            DomainError::precondition_failed(INVALID_EMAIL)
        );
    }

    #[test]
    fn test_description_length_boundary() {
        assert!(ensure_description(&"a".repeat(100)).is_ok());
        assert_eq!(
            ensure_description(&"a".repeat(101)).unwrap_err(),
            DomainError::precondition_failed(DESCRIPTION_TOO_LONG)
        );
    }

    #[test]
    fn test_description_counts_characters() {
        assert!(ensure_description(&"ñ".repeat(100)).is_ok());
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), MEMBER_NOT_FOUND).unwrap(), id);
        assert_eq!(
            parse_id("0", MEMBER_NOT_FOUND).unwrap_err(),
            DomainError::not_found(MEMBER_NOT_FOUND)
        );
    }
}
