use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for meal planning operations
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for PlannerError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => PlannerError::NotFound("Record not found".to_string()),
            _ => PlannerError::DatabaseError(err.to_string()),
        }
    }
}
