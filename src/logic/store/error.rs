#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    /// Stored document exists but cannot be decoded
    Corrupt { key: String, reason: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO Error: {}", e),
            StoreError::SerializationError(e) => write!(f, "Serialization Error: {}", e),
            StoreError::Corrupt { key, reason } => {
                write!(f, "Corrupt stored document '{}': {}", key, reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationError(err)
    }
}
