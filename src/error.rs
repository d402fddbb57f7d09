use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to retrieve current payment info")]
    RetrievalError(#[source] Box<BillingError>),
    #[error("User is not authorized to perform this action")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, BillingError>;
