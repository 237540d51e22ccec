//! Classification of storage failures into constraint violations.
//!
//! The driver's structured signal ([`DbErr::sql_err`]) is consulted first.
//! Errors that carry no structured cause fall back to matching the
//! engine-specific wording of the message.

use sea_orm::{DbErr, SqlErr};

/// What a failed write tells about the data graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A unique index rejected the row.
    DuplicateKey,
    /// A foreign key points at a row that does not exist, or a delete would
    /// leave dependents behind.
    DanglingReference,
    /// Anything else.
    Unclassified,
}

/// Lower-cased phrases used by SQLite, PostgreSQL and MySQL.
const UNIQUE_PHRASES: &[&str] = &[
    "unique constraint",
    "duplicate key value",
    "duplicate entry",
];

const FOREIGN_KEY_PHRASES: &[&str] = &[
    "foreign key constraint",
    "violates foreign key",
];

pub fn classify(err: &DbErr) -> ConstraintViolation {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConstraintViolation::DuplicateKey,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ConstraintViolation::DanglingReference,
        _ => {
            let violation = classify_message(&err.to_string());
            if violation != ConstraintViolation::Unclassified {
                tracing::warn!("constraint violation classified from message: {err}");
            }
            violation
        }
    }
}

pub fn classify_message(message: &str) -> ConstraintViolation {
    let message = message.to_lowercase();
    if UNIQUE_PHRASES.iter().any(|p| message.contains(p)) {
        ConstraintViolation::DuplicateKey
    } else if FOREIGN_KEY_PHRASES.iter().any(|p| message.contains(p)) {
        ConstraintViolation::DanglingReference
    } else {
        ConstraintViolation::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_unique_message_is_duplicate() {
        assert_eq!(
            classify_message("UNIQUE constraint failed: currencies.name, currencies.code"),
            ConstraintViolation::DuplicateKey
        );
    }

    #[test]
    fn sqlite_foreign_key_message_is_dangling() {
        assert_eq!(
            classify_message("FOREIGN KEY constraint failed"),
            ConstraintViolation::DanglingReference
        );
    }

    #[test]
    fn postgres_messages_are_classified() {
        assert_eq!(
            classify_message(
                "duplicate key value violates unique constraint \"idx-banks-name-country-unique\""
            ),
            ConstraintViolation::DuplicateKey
        );
        assert_eq!(
            classify_message("insert or update on table \"banks\" violates foreign key constraint"),
            ConstraintViolation::DanglingReference
        );
    }

    #[test]
    fn other_failures_are_unclassified() {
        assert_eq!(
            classify_message("database is locked"),
            ConstraintViolation::Unclassified
        );
        assert_eq!(
            classify(&DbErr::Custom("connection reset".to_string())),
            ConstraintViolation::Unclassified
        );
    }

    #[test]
    fn custom_error_with_constraint_wording_falls_back_to_message() {
        let err = DbErr::Custom("UNIQUE constraint failed: people.name".to_string());
        assert_eq!(classify(&err), ConstraintViolation::DuplicateKey);
    }
}
