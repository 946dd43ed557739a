//! Guard clauses shared by every entity constructor and mutator
//!
//! Each check takes the value plus the parameter name it guards and returns
//! `Err(DomainError::InvalidArgument)` on violation. Callers run all guards
//! before writing any field, so a failed guard leaves the receiver untouched.

use chrono::Duration;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Reject the nil UUID as an identifier.
pub fn against_nil_id(value: Uuid, param: &'static str) -> DomainResult<()> {
    if value.is_nil() {
        return Err(DomainError::invalid_argument(param, "cannot be empty"));
    }
    Ok(())
}

/// Reject empty or whitespace-only strings.
pub fn against_blank(value: &str, param: &'static str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(param, "cannot be blank"));
    }
    Ok(())
}

/// Reject integers that are zero or negative.
pub fn against_negative_or_zero_int(value: i32, param: &'static str) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::invalid_argument(
            param,
            "must be greater than zero",
        ));
    }
    Ok(())
}

/// Reject decimals that are zero or negative.
pub fn against_negative_or_zero_decimal(value: Decimal, param: &'static str) -> DomainResult<()> {
    if value <= Decimal::ZERO {
        return Err(DomainError::invalid_argument(
            param,
            "must be greater than zero",
        ));
    }
    Ok(())
}

/// Reject negative durations.
pub fn against_negative_duration(value: Duration, param: &'static str) -> DomainResult<()> {
    if value < Duration::zero() {
        return Err(DomainError::invalid_argument(param, "cannot be negative"));
    }
    Ok(())
}

/// Reject durations that are zero or negative.
pub fn against_non_positive_duration(value: Duration, param: &'static str) -> DomainResult<()> {
    if value <= Duration::zero() {
        return Err(DomainError::invalid_argument(
            param,
            "must be greater than zero",
        ));
    }
    Ok(())
}

/// Reject a date range whose end, if present, is not strictly after its start.
///
/// Generic so it covers both `NaiveDate` ranges (workout plans) and
/// `DateTime<Utc>` ranges (analytics periods).
pub fn against_invalid_date_range<T: PartialOrd>(
    start: T,
    end: Option<T>,
    param: &'static str,
) -> DomainResult<()> {
    if let Some(end) = end {
        if end <= start {
            return Err(DomainError::invalid_argument(
                param,
                "end date must be after start date",
            ));
        }
    }
    Ok(())
}

/// Reject strings that do not look like a `local@domain.tld` email address.
pub fn against_invalid_email(value: &str, param: &'static str) -> DomainResult<()> {
    against_blank(value, param)?;
    if value.len() > 255 {
        return Err(DomainError::invalid_argument(param, "is too long"));
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(value) {
        return Err(DomainError::invalid_argument(param, "is not a valid email"));
    }
    Ok(())
}

/// Reject passwords shorter than 8 characters.
pub fn against_short_password(value: &str, param: &'static str) -> DomainResult<()> {
    if value.len() < 8 {
        return Err(DomainError::invalid_argument(
            param,
            "must be at least 8 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn nil_id_is_rejected() {
        assert!(against_nil_id(Uuid::nil(), "id").is_err());
        assert!(against_nil_id(Uuid::new_v4(), "id").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_strings_are_rejected(#[case] value: &str) {
        assert!(against_blank(value, "name").is_err());
    }

    #[test]
    fn non_blank_string_passes() {
        assert!(against_blank("Push Up", "name").is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MIN)]
    fn non_positive_ints_are_rejected(#[case] value: i32) {
        assert!(against_negative_or_zero_int(value, "sets").is_err());
    }

    #[test]
    fn positive_decimal_passes() {
        assert!(against_negative_or_zero_decimal(dec!(0.01), "kg").is_ok());
        assert!(against_negative_or_zero_decimal(Decimal::ZERO, "kg").is_err());
        assert!(against_negative_or_zero_decimal(dec!(-1), "kg").is_err());
    }

    #[test]
    fn negative_duration_is_rejected() {
        assert!(against_negative_duration(Duration::seconds(-1), "duration").is_err());
        assert!(against_negative_duration(Duration::zero(), "duration").is_ok());
        assert!(against_non_positive_duration(Duration::zero(), "duration").is_err());
        assert!(against_non_positive_duration(Duration::seconds(1), "duration").is_ok());
    }

    #[test]
    fn date_range_end_must_follow_start() {
        use chrono::NaiveDate;
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        assert!(against_invalid_date_range(start, Some(later), "end_date").is_ok());
        assert!(against_invalid_date_range(start, Some(start), "end_date").is_err());
        assert!(against_invalid_date_range(later, Some(start), "end_date").is_err());
        // Open-ended ranges are always valid
        assert!(against_invalid_date_range(start, None, "end_date").is_ok());
    }

    #[rstest]
    #[case("test@example.com", true)]
    #[case("user.name@domain.co.uk", true)]
    #[case("", false)]
    #[case("invalid", false)]
    #[case("no@dot", false)]
    #[case("spaces in@email.com", false)]
    fn email_format_is_checked(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(against_invalid_email(value, "email").is_ok(), ok);
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(against_short_password("short", "password").is_err());
        assert!(against_short_password("12345678", "password").is_ok());
    }
}
