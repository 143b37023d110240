use api::ApiError;
use thiserror::Error;

/// Everything that can stop an upload. `Display` is the notification text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload a valid file (PDF, DOC, DOCX, or TXT)")]
    UnsupportedType { mime: String },
    #[error("File size must be less than 10MB")]
    TooLarge { size: u64 },
    #[error("Unable to read the selected file")]
    Unreadable,
    #[error("Invalid response format from server")]
    MissingResults,
    #[error(transparent)]
    Api(#[from] ApiError),
}
