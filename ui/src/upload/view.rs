use api::{AnalysisPayload, ApiClient};
use dioxus::prelude::*;
use tracing::debug;

use crate::core::format::format_bytes;
use crate::core::notify::{NoticeEvent, NoticeId, Notifier};
use crate::core::timing::PlatformSleeper;

use super::{
    display_name, notice_text, SelectedFile, UploadError, UploadFlow, UploadState,
    ACCEPT_ATTRIBUTE, MAX_UPLOAD_BYTES,
};

/// File picker with the synthetic progress bar. `state` is owned here but
/// lives in the page so it can show its own busy indicator.
#[component]
pub fn DocumentUpload(
    state: Signal<UploadState>,
    on_complete: EventHandler<(AnalysisPayload, NoticeId)>,
    on_error: EventHandler<UploadError>,
) -> Element {
    let notifier = match try_use_context::<Coroutine<NoticeEvent>>() {
        Some(host) => Notifier::new(host.tx()),
        None => Notifier::detached(),
    };
    let client = use_hook(ApiClient::from_env);

    let current = state();
    let max_size = format_bytes(MAX_UPLOAD_BYTES);

    let onchange = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            return;
        };
        let notifier = notifier.clone();
        let client = client.clone();
        spawn(async move {
            let mut selected = Vec::new();
            if let Some(key) = engine.files().into_iter().next() {
                match engine.file_size(&key).await {
                    Some(size) => selected.push(SelectedFile::from_engine(key, size, engine.clone())),
                    // Size unknown up front: read the bytes and measure those.
                    None => match engine.read_file(&key).await {
                        Some(bytes) => selected.push(SelectedFile::from_bytes(display_name(&key), bytes)),
                        None => {
                            notifier.error(notice_text(&UploadError::Unreadable));
                            return;
                        }
                    },
                }
            }
            debug!(files = selected.len(), "file selection changed");

            let flow = UploadFlow::new(client, PlatformSleeper, notifier);
            flow.run(
                selected,
                move |next| {
                    let mut state = state;
                    state.set(next);
                },
                move |results, notice| on_complete.call((results, notice)),
                move |err| on_error.call(err),
            )
            .await;
        });
    };

    rsx! {
        section { class: "card upload-card",
            div { class: "upload-dropzone",
                class: if current.uploading { "upload-dropzone--busy" },
                span { class: "upload-dropzone__icon", aria_hidden: "true", "📄" }
                p { class: "upload-dropzone__title", "Select a document to analyse" }
                p { class: "upload-dropzone__meta", "PDF, DOC, DOCX or TXT · up to {max_size}" }
                label { class: "button button--primary upload-dropzone__button",
                    r#for: "document-input",
                    if current.uploading { "Uploading…" } else { "Choose file" }
                }
                input {
                    id: "document-input",
                    class: "visually-hidden",
                    r#type: "file",
                    accept: ACCEPT_ATTRIBUTE,
                    multiple: false,
                    disabled: current.uploading,
                    onchange: onchange,
                }
            }

            if current.uploading {
                div { class: "upload-progress",
                    div { class: "upload-progress__header",
                        span { "Uploading and analysing" }
                        span { class: "upload-progress__value", "{current.progress}%" }
                    }
                    div { class: "upload-progress__track",
                        div {
                            class: "upload-progress__bar",
                            style: "width: {current.progress}%",
                        }
                    }
                }
            }
        }
    }
}

/// Static guidance shown beside the picker.
#[component]
pub fn UploadGuidance() -> Element {
    rsx! {
        div { class: "upload-guidance",
            section { class: "card",
                h3 { class: "card__title", "Upload tips" }
                ul { class: "upload-guidance__list",
                    li { "Text-based PDFs give the most accurate extraction." }
                    li { "Scanned documents are run through OCR and may take longer." }
                    li { "Upload one document at a time; the latest result replaces the previous one." }
                }
            }
            section { class: "card",
                h3 { class: "card__title", "What you'll get" }
                ul { class: "upload-guidance__list",
                    li { strong { "Executive summary" } " of the document's contents" }
                    li { strong { "Compliance overview" } " of satisfied, missing and pending requirements" }
                    li { strong { "Extracted entities" } " with a severity rating" }
                    li { strong { "Clause traceability" } " linking each clause to its recommendation" }
                }
            }
        }
    }
}
