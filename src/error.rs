//! Error types for icon rendering

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing or saving an icon
#[derive(Error, Debug)]
pub enum Error {
    /// A canvas cannot be allocated for this size
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    /// The PNG encoder rejected the canvas
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// The output file (or its directory) could not be written
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_the_path() {
        let err = Error::WriteError {
            path: PathBuf::from("out/icon16.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/icon16.png"));
        assert!(msg.contains("denied"));
    }
}
