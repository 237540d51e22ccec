//! Internal helpers for command validation and normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! field rules and their messages so every command reports failures the same
//! way.

use chrono::NaiveDate;

use crate::{EngineError, ResultEngine};

/// Trim `value` and reject it when nothing is left.
pub(crate) fn required_text(value: &str, field: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`], upper-casing the result (currency and country codes).
pub(crate) fn required_code(value: &str, field: &str) -> ResultEngine<String> {
    required_text(value, field).map(|code| code.to_uppercase())
}

/// Trim optional text; blank becomes `None`.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Reject ids that cannot belong to a stored row.
pub(crate) fn positive_id(value: i64, field: &str) -> ResultEngine<i64> {
    if value <= 0 {
        return Err(EngineError::invalid(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(value)
}

pub(crate) fn positive_amount(value: f64, field: &str) -> ResultEngine<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::invalid(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(value)
}

pub(crate) fn finite_amount(value: f64, field: &str) -> ResultEngine<f64> {
    if !value.is_finite() {
        return Err(EngineError::invalid(format!("{field} must be a finite number")));
    }
    Ok(value)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub(crate) fn iso_date(value: &str, field: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        EngineError::invalid(format!(
            "{field} must be a valid date in YYYY-MM-DD format"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("  Visa ", "name").unwrap(), "Visa");
        assert_eq!(
            required_text("   ", "name").unwrap_err(),
            EngineError::InvalidPayload("name is required".to_string())
        );
    }

    #[test]
    fn codes_are_upper_cased() {
        assert_eq!(required_code(" usd ", "code").unwrap(), "USD");
    }

    #[test]
    fn optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(Some(" gold ")), Some("gold".to_string()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(positive_id(1, "bank_id").is_ok());
        assert_eq!(
            positive_id(0, "bank_id").unwrap_err(),
            EngineError::InvalidPayload("bank_id must be a positive integer".to_string())
        );
        assert!(positive_id(-4, "bank_id").is_err());
    }

    #[test]
    fn amounts_must_be_finite_and_positive() {
        assert!(positive_amount(0.01, "amount").is_ok());
        assert!(positive_amount(0.0, "amount").is_err());
        assert!(positive_amount(-3.0, "amount").is_err());
        assert!(positive_amount(f64::NAN, "amount").is_err());
        assert!(positive_amount(f64::INFINITY, "amount").is_err());
        assert!(finite_amount(-3.0, "balance").is_ok());
    }

    #[test]
    fn dates_must_be_real_calendar_days() {
        assert_eq!(
            iso_date("2026-03-20", "closing_date").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
        );
        assert!(iso_date("2026-02-30", "closing_date").is_err());
        assert!(iso_date("20/03/2026", "closing_date").is_err());
        assert_eq!(
            iso_date("", "due_date").unwrap_err(),
            EngineError::InvalidPayload(
                "due_date must be a valid date in YYYY-MM-DD format".to_string()
            )
        );
    }
}
