/// Errors raised while connecting to or probing the database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_driver_errors_convert() {
        let err: DatabaseError = DbErr::Custom("connection refused".into()).into();
        assert!(matches!(err, DatabaseError::Postgres(_)));
        assert!(err.to_string().starts_with("PostgreSQL error:"));
    }

    #[test]
    fn test_migration_error_message() {
        let err = DatabaseError::MigrationError("relation \"products\" already exists".into());
        assert_eq!(err.to_string(), "Migration error: relation \"products\" already exists");
    }
}
