use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    /// The proposed customer collides with an existing record; carries the owner so the
    /// caller can tell the user whom to contact.
    #[error("Duplicate customer: already registered by {existing_owner} (customer #{existing_customer_id})")]
    Duplicate {
        existing_owner: String,
        existing_customer_id: i64,
    },

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Not found: {0}")]
    NotFound(String),
    
    #[error("Internal error: {0}")]
    InternalError(String),
    
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<validator::ValidationErrors> for CrmError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CrmError::ValidationError(errors.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CrmError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CrmError::DatabaseError(error.to_string())
    }
}

pub type CrmResult<T> = Result<T, CrmError>;
