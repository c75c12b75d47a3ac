//! Error types for blob storage operations

use thiserror::Error;

/// Errors that can occur while addressing or moving blobs
#[derive(Error, Debug)]
pub enum StorageError {
    /// Storage address does not match the expected `<account>.net/<container>/<path>` shape
    #[error("Malformed storage address: {0}")]
    MalformedAddress(String),

    /// Blob transport failure (download or upload)
    #[error("Blob transport error: {path} - {reason}")]
    Transport { path: String, reason: String },

    /// Required credentials are missing from the environment
    #[error("Missing storage credentials: {0}")]
    MissingCredentials(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Get a user-friendly error message for log output
    pub fn user_message(&self) -> String {
        match self {
            StorageError::MalformedAddress(addr) => {
                format!(
                    "Malformed storage address: {addr}\n\nHint: Expected a URL like \
                    'https://account.blob.core.windows.net/container/folder'."
                )
            }
            StorageError::MissingCredentials(var) => {
                format!("Missing storage credentials.\n\nHint: Set the {var} environment variable.")
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::MalformedAddress("ftp://nowhere".to_string());
        assert!(err.to_string().contains("ftp://nowhere"));

        let err = StorageError::Transport {
            path: "container/file.csv".to_string(),
            reason: "timeout".to_string(),
        };
        assert!(err.to_string().contains("timeout"));
    }
}
