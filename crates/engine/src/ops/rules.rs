//! Per-table translation of storage outcomes into engine errors.

use sea_orm::{ConnectionTrait, DbErr, DeleteResult, EntityTrait, PrimaryKeyTrait};

use crate::{
    EngineError, ResultEngine,
    constraint::{ConstraintViolation, classify},
};

/// Describes how one table reports failed writes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WriteRules {
    /// Human name of the record, e.g. `"bank account"`.
    pub(crate) label: &'static str,
    /// Conflict code and message for a natural key collision. Tables
    /// without a natural key have none.
    pub(crate) duplicate: Option<(&'static str, &'static str)>,
    /// Reported when a foreign key vanished between the reference check and
    /// the write.
    pub(crate) dangling: &'static str,
    /// Conflict code and message for a delete that storage refused because
    /// dependents still point at the row.
    pub(crate) in_use: (&'static str, &'static str),
}

impl WriteRules {
    pub(crate) fn not_found(&self) -> EngineError {
        EngineError::KeyNotFound(format!("{} not found", self.label))
    }

    fn write_error(&self, err: DbErr) -> EngineError {
        match (classify(&err), self.duplicate) {
            (ConstraintViolation::DuplicateKey, Some((code, message))) => {
                EngineError::Conflict { code, message }
            }
            (ConstraintViolation::DanglingReference, _) => {
                EngineError::InvalidPayload(self.dangling.to_string())
            }
            _ => EngineError::Database(err),
        }
    }

    /// Result of an insert.
    pub(crate) fn written<T>(&self, result: Result<T, DbErr>) -> ResultEngine<T> {
        result.map_err(|err| self.write_error(err))
    }

    /// Result of an update through an active model; a missing row is
    /// reported as not found.
    pub(crate) fn updated<T>(&self, result: Result<T, DbErr>) -> ResultEngine<T> {
        result.map_err(|err| match err {
            DbErr::RecordNotUpdated => self.not_found(),
            err => self.write_error(err),
        })
    }

    /// Result of an update or delete that reports affected rows.
    pub(crate) fn affected(&self, rows_affected: u64) -> ResultEngine<()> {
        if rows_affected == 0 {
            return Err(self.not_found());
        }
        Ok(())
    }

    pub(crate) fn deleted(&self, result: Result<DeleteResult, DbErr>) -> ResultEngine<()> {
        let outcome = result.map_err(|err| match classify(&err) {
            ConstraintViolation::DanglingReference => EngineError::Conflict {
                code: self.in_use.0,
                message: self.in_use.1,
            },
            _ => EngineError::Database(err),
        })?;
        self.affected(outcome.rows_affected)
    }

    pub(crate) fn found<T>(&self, row: Option<T>) -> ResultEngine<T> {
        row.ok_or_else(|| self.not_found())
    }
}

/// Fetch a row by id or fail with the table's not-found error.
pub(crate) async fn find_row<E, C>(db: &C, rules: &WriteRules, id: i64) -> ResultEngine<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let row = E::find_by_id(id).one(db).await?;
    rules.found(row)
}

/// Delete a row by id.
pub(crate) async fn delete_row<E, C>(db: &C, rules: &WriteRules, id: i64) -> ResultEngine<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    rules.deleted(E::delete_by_id(id).exec(db).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: WriteRules = WriteRules {
        label: "bank",
        duplicate: Some(("duplicate_bank", "name and country combination must be unique")),
        dangling: "country must exist",
        in_use: ("bank_in_use", "bank is in use"),
    };

    fn custom(message: &str) -> DbErr {
        DbErr::Custom(message.to_string())
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        let err = RULES
            .written::<()>(Err(custom("UNIQUE constraint failed: banks.name, banks.country")))
            .unwrap_err();
        assert_eq!(err.code(), "duplicate_bank");
    }

    #[test]
    fn dangling_maps_to_invalid_payload() {
        let err = RULES
            .written::<()>(Err(custom("FOREIGN KEY constraint failed")))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPayload("country must exist".to_string())
        );
    }

    #[test]
    fn duplicate_without_natural_key_is_internal() {
        let rules = WriteRules {
            duplicate: None,
            ..RULES
        };
        let err = rules
            .written::<()>(Err(custom("UNIQUE constraint failed: people.id")))
            .unwrap_err();
        assert_eq!(err.code(), "internal_error");
    }

    #[test]
    fn missing_update_is_not_found() {
        let err = RULES.updated::<()>(Err(DbErr::RecordNotUpdated)).unwrap_err();
        assert_eq!(err, EngineError::KeyNotFound("bank not found".to_string()));
    }

    #[test]
    fn refused_delete_is_in_use() {
        let err = RULES
            .deleted(Err(custom("FOREIGN KEY constraint failed")))
            .unwrap_err();
        assert_eq!(err.code(), "bank_in_use");
        assert_eq!(err.to_string(), "bank is in use");
    }

    #[test]
    fn delete_of_nothing_is_not_found() {
        let err = RULES
            .deleted(Ok(DeleteResult { rows_affected: 0 }))
            .unwrap_err();
        assert_eq!(err.code(), "not_found");
        assert!(RULES.deleted(Ok(DeleteResult { rows_affected: 1 })).is_ok());
    }
}
