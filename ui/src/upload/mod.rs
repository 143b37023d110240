//! Document upload: client-side validation, the synthetic progress ticker and
//! the hand-off of analysis results to the page.

mod error;
mod flow;
mod validate;
mod view;

pub use error::UploadError;
pub use flow::{
    notice_text, UploadFlow, UploadOutcome, UploadState, FALLBACK_ERROR_MESSAGE, PROGRESS_CEILING,
    PROGRESS_INTERVAL_MS, PROGRESS_STEP, SETTLE_DELAY_MS, SUCCESS_MESSAGE,
};
pub use validate::{
    display_name, is_accepted_type, mime_for_name, validate, FileMeta, SelectedFile,
    ACCEPTED_TYPES, ACCEPT_ATTRIBUTE, MAX_UPLOAD_BYTES,
};
pub use view::{DocumentUpload, UploadGuidance};
