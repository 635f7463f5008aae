use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure taxonomy for repository operations.
///
/// Constraint enforcement belongs to the storage engine; this type only
/// classifies what the engine reports. Unique and foreign-key breaches
/// become [`DataError::ConstraintViolation`], everything else passes
/// through as [`DataError::Db`].
#[derive(Error, Debug)]
pub enum DataError {
    /// Unique or foreign-key constraint breach.
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[source] DbErr),
    /// Referenced row absent at read, update, or delete time.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// Any other database failure, surfaced unchanged.
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for DataError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                DataError::ConstraintViolation(err)
            }
            _ => DataError::Db(err),
        }
    }
}

impl DataError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DataError::NotFound { entity, id }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DataError::ConstraintViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::DataError;

    /// Expect non-constraint database errors to pass through unchanged
    #[test]
    fn classifies_other_errors_as_db() {
        let err = DataError::from(DbErr::Custom("connection lost".to_string()));

        assert!(matches!(err, DataError::Db(_)));
        assert!(!err.is_constraint_violation());
    }

    /// Expect NotFound to name the entity and id
    #[test]
    fn not_found_names_entity_and_id() {
        let err = DataError::not_found("planet", 42);

        assert_eq!(err.to_string(), "planet with id 42 not found");
    }
}
