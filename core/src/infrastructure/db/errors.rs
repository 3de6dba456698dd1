use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::domain::common::entities::app_errors::CoreError;

/// Converts a store error raised while trying to `action`.
///
/// Unique constraint violations become [`CoreError::DuplicateKey`]; anything else is a
/// [`CoreError::ServerError`] carrying the kind of the store error.
pub fn map_db_err(action: &str, e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        warn!("Duplicate key while trying to {}: {}", action, detail);
        return CoreError::DuplicateKey(detail);
    }

    error!("Failed to {}: {}", action, e);
    CoreError::ServerError(error_kind(&e).to_string())
}

fn error_kind(e: &DbErr) -> &'static str {
    match e {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => "ConnectionError",
        DbErr::Exec(_) => "ExecError",
        DbErr::Query(_) => "QueryError",
        DbErr::RecordNotFound(_) => "RecordNotFound",
        DbErr::RecordNotInserted => "RecordNotInserted",
        DbErr::RecordNotUpdated => "RecordNotUpdated",
        DbErr::Type(_) | DbErr::TryIntoErr { .. } => "TypeError",
        DbErr::Json(_) => "JsonError",
        _ => "DatabaseError",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_carry_their_kind() {
        assert_eq!(
            map_db_err("update client", DbErr::RecordNotUpdated),
            CoreError::ServerError("RecordNotUpdated".to_string())
        );
        assert_eq!(
            map_db_err("fetch clients", DbErr::Custom("boom".to_string())),
            CoreError::ServerError("DatabaseError".to_string())
        );
    }
}
