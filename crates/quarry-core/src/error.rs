use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid price: {0}")]
    Price(String),

    #[error("Unknown field: {0}")]
    Field(String),

    #[error("Predicate error: {0}")]
    Predicate(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Catalog(e.to_string())
    }
}
