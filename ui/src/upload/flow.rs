use std::cell::Cell;

use api::{AnalysisPayload, DocumentFile, DocumentService, UploadEnvelope};
use futures::future::{select, Either};
use futures::pin_mut;
use tracing::{info, warn};

use crate::core::notify::{NoticeId, Notifier};
use crate::core::timing::Sleeper;

use super::{validate, SelectedFile, UploadError};

/// Synthetic progress: +10 every 200 ms, never past 90 on its own. This is a
/// placeholder for the user's benefit, not a measurement of bytes sent.
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_CEILING: u8 = 90;
pub const PROGRESS_INTERVAL_MS: u64 = 200;

/// Wait after an attempt before the picker is re-enabled and progress cleared.
pub const SETTLE_DELAY_MS: u64 = 1_000;

pub const SUCCESS_MESSAGE: &str = "Document uploaded and analyzed successfully!";
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to upload document. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadState {
    pub uploading: bool,
    /// 0..=100
    pub progress: u8,
}

impl UploadState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn started() -> Self {
        Self {
            uploading: true,
            progress: 0,
        }
    }

    /// One ticker step, capped at [`PROGRESS_CEILING`].
    pub fn advanced(self) -> Self {
        Self {
            progress: self
                .progress
                .saturating_add(PROGRESS_STEP)
                .min(PROGRESS_CEILING)
                .max(self.progress),
            ..self
        }
    }

    pub fn completed(self) -> Self {
        Self {
            progress: 100,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Nothing was selected.
    Ignored,
    /// Failed validation; no request was made.
    Rejected(UploadError),
    Completed,
    Failed(UploadError),
}

/// Text shown for a failed attempt.
pub fn notice_text(err: &UploadError) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        text
    }
}

/// One upload attempt from selection to settled state.
pub struct UploadFlow<S, T> {
    service: S,
    sleeper: T,
    notifier: Notifier,
}

impl<S: DocumentService, T: Sleeper> UploadFlow<S, T> {
    pub fn new(service: S, sleeper: T, notifier: Notifier) -> Self {
        Self {
            service,
            sleeper,
            notifier,
        }
    }

    /// Run an attempt. `publish` receives every state change; exactly one of
    /// `on_complete` / `on_error` fires for attempts that pass validation,
    /// before the settle delay starts.
    pub async fn run(
        &self,
        files: Vec<SelectedFile>,
        publish: impl Fn(UploadState),
        on_complete: impl FnOnce(AnalysisPayload, NoticeId),
        on_error: impl FnOnce(UploadError),
    ) -> UploadOutcome {
        let Some(file) = files.into_iter().next() else {
            return UploadOutcome::Ignored;
        };

        if let Err(err) = validate(file.meta()) {
            warn!(name = %file.meta().name, error = %err, "upload rejected");
            self.notifier.error(notice_text(&err));
            return UploadOutcome::Rejected(err);
        }

        let state = Cell::new(UploadState::started());
        publish(state.get());

        let upload = self.send(file);
        let ticker = async {
            while state.get().progress < PROGRESS_CEILING {
                self.sleeper.sleep(PROGRESS_INTERVAL_MS).await;
                let next = state.get().advanced();
                state.set(next);
                publish(next);
            }
        };
        pin_mut!(upload);
        pin_mut!(ticker);

        // Whichever way the request settles the ticker is dropped with it.
        let response = match select(upload, ticker).await {
            Either::Left((response, _ticker)) => response,
            Either::Right(((), upload)) => upload.await,
        };

        let result = response.and_then(|envelope| {
            let done = state.get().completed();
            state.set(done);
            publish(done);
            envelope.results.ok_or(UploadError::MissingResults)
        });

        let outcome = match result {
            Ok(results) => {
                info!("analysis received");
                let notice = self.notifier.success(SUCCESS_MESSAGE, true);
                on_complete(results, notice);
                UploadOutcome::Completed
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                self.notifier.error(notice_text(&err));
                on_error(err.clone());
                UploadOutcome::Failed(err)
            }
        };

        self.sleeper.sleep(SETTLE_DELAY_MS).await;
        publish(UploadState::idle());
        outcome
    }

    async fn send(&self, file: SelectedFile) -> Result<UploadEnvelope, UploadError> {
        let (meta, bytes) = file.read().await?;
        let document = DocumentFile::new(meta.name, meta.mime, bytes);
        Ok(self.service.upload_document(document).await?)
    }
}
