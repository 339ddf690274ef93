//! Error types for the `ruls` library.
//!
//! Only failures that abort a whole listing live here. Everything that can go
//! wrong for a single entry (unreadable file, broken link, silent classifier)
//! is absorbed into placeholder cells and never reaches this enum.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal, per-invocation failures.
#[derive(Debug, Error)]
pub enum ListError {
    /// The start path does not exist or is not a directory.
    #[error("Path could not be found, or path is not a directory.")]
    PathNotFound(PathBuf),

    /// The start directory exists but its entries cannot be listed.
    #[error("Cannot read directory '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let err = ListError::PathNotFound(PathBuf::from("/nope"));
        assert_eq!(
            err.to_string(),
            "Path could not be found, or path is not a directory."
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unreadable_mentions_path() {
        let err = ListError::Unreadable {
            path: PathBuf::from("/locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/locked"));
    }
}
