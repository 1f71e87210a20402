use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for shopping list operations
#[derive(Debug, Error)]
pub enum ShoppingError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for ShoppingError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ShoppingError::NotFound("Record not found".to_string()),
            _ => ShoppingError::DatabaseError(err.to_string()),
        }
    }
}

impl From<ShoppingError> for String {
    fn from(error: ShoppingError) -> Self {
        error.to_string()
    }
}
