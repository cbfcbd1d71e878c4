use thiserror::Error;

use crate::upload::ALLOWED_EXTENSIONS;

/// Shown when a failure carries no message of its own.
pub const GENERIC_UPLOAD_ERROR: &str = "Error uploading file";

/// Shown when the server rejects the upload without a `detail`.
pub const GENERIC_REJECTION: &str = "Failed to upload file";

/// Everything that can go wrong between picking a file and rendering rows.
///
/// The `Display` output of every variant is the exact text shown in the
/// error panel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Please select a file to upload")]
    NoFileSelected,

    #[error("Invalid file type. Please upload {} files only.", ALLOWED_EXTENSIONS.join(", "))]
    InvalidFileType { extension: String },

    /// The endpoint answered with a non-2xx status.
    #[error("{0}")]
    Upstream(String),

    /// The request never completed, or its body could not be read.
    #[error("{0}")]
    Transport(String),
}

impl UploadError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(GENERIC_UPLOAD_ERROR.to_string())
        } else {
            Self::Transport(message)
        }
    }

    pub fn upstream(detail: Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.is_empty() => Self::Upstream(detail),
            _ => Self::Upstream(GENERIC_REJECTION.to_string()),
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        Self::transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;
