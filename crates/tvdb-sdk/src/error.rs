use thiserror::Error;
use tvdb_store::{CatalogError, ErrorKind};

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// The catalog error kind, or `None` for configuration and I/O failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SdkError::Catalog(err) => Some(err.kind()),
            SdkError::Config(_) | SdkError::Io(_) => None,
        }
    }
}

impl From<tvdb_types::TypeError> for SdkError {
    fn from(err: tvdb_types::TypeError) -> Self {
        SdkError::Catalog(err.into())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
