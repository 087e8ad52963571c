use std::fmt;

/// Errors that can occur during object storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// No object exists under the requested key.
    NotFound(String),
    /// The object key is empty or would escape the store's namespace.
    InvalidKey(String),
    /// An I/O error occurred.
    Io(std::io::Error),
    /// The remote backend rejected or failed the request.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "object not found: {key}"),
            Self::InvalidKey(msg) => write!(f, "invalid object key: {msg}"),
            Self::Io(err) => write!(f, "storage IO error: {err}"),
            Self::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
