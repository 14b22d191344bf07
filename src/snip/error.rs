use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("A snippet named '{0}' already exists")]
    DuplicateName(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Corrupt store data: {0}")]
    CorruptData(String),

    #[error("Tag service error: {0}")]
    TagService(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnipError>;
