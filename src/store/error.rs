//! Storage errors.

/// Error returned when the durable store cannot be read or written.
#[derive(Debug)]
pub enum StoreError {
    /// The backing file could not be read or written
    Io(std::io::Error),
    /// The backing file exists but does not hold a valid string map
    Malformed(serde_json::Error),
    /// No platform config directory could be determined
    ConfigDirUnavailable,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "preference store i/o failed: {}", err),
            StoreError::Malformed(err) => {
                write!(f, "preference store contents are malformed: {}", err)
            }
            StoreError::ConfigDirUnavailable => {
                write!(f, "no config directory available for the preference store")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Malformed(err) => Some(err),
            StoreError::ConfigDirUnavailable => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}
