use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Rate feed request failed: {0}")]
    FeedRequestError(#[from] reqwest::Error),
    #[error("Rate feed error: {0}")]
    FeedFormatError(String),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
