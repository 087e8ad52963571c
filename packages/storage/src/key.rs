use super::error::StorageError;

const MAX_KEY_LEN: usize = 1024;

/// Validate an object key.
///
/// Keys are relative, slash-separated paths. Empty segments, `.`/`..`
/// segments, backslashes and NUL bytes are rejected so that a key can be
/// mapped onto a filesystem path without escaping the store root.
pub fn validate_key(key: &str) -> Result<&str, StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key must not be empty".into()));
    }
    if key.len() > MAX_KEY_LEN {
        return Err(StorageError::InvalidKey(format!(
            "key exceeds {MAX_KEY_LEN} bytes"
        )));
    }
    if key.contains('\0') || key.contains('\\') {
        return Err(StorageError::InvalidKey(format!(
            "key contains a forbidden character: {key:?}"
        )));
    }
    for segment in key.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(StorageError::InvalidKey(format!(
                "key has an invalid segment: {key:?}"
            )));
        }
    }
    Ok(key)
}
