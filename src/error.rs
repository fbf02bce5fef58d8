use thiserror::Error;

/// Errors raised at the ingestion boundary.
///
/// The analytic services never fail: missing or malformed values degrade to
/// absent fields. Only decoding raw records and reading configuration can
/// produce one of these; file access lives in the CLI.
#[derive(Error, Debug)]
pub enum FitlogError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FitlogError>;
