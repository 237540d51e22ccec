//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidPayload`] thrown when a command fails a field, cross-field or
//!   reference rule.
//! - [`KeyNotFound`] thrown when an item addressed by id is not found.
//! - [`Conflict`] thrown when a natural key collides or a row is still in use.
//! - [`Database`] for every storage failure that cannot be classified.
//!
//!  [`InvalidPayload`]: EngineError::InvalidPayload
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`Conflict`]: EngineError::Conflict
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    InvalidPayload(String),
    #[error("{0}")]
    KeyNotFound(String),
    #[error("{message}")]
    Conflict {
        code: &'static str,
        message: &'static str,
    },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Stable machine readable code, suitable for clients to branch on.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "invalid_payload",
            Self::KeyNotFound(_) => "not_found",
            Self::Conflict { code, .. } => *code,
            Self::Database(_) => "internal_error",
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidPayload(a), Self::InvalidPayload(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (
                Self::Conflict { code: a, message: x },
                Self::Conflict { code: b, message: y },
            ) => a == b && x == y,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
