use api::AnalysisPayload;
use dioxus::prelude::*;

use crate::core::notify::{NoticeEvent, NoticeId};
use crate::results::AnalysisResults;
use crate::upload::{DocumentUpload, UploadError, UploadGuidance, UploadState};

/// Upload page: picker on top, the latest analysis below. Results live for
/// the session only and are replaced (or cleared) by the next attempt.
#[component]
pub fn UploadPage() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let state = use_signal(UploadState::idle);
    let mut results = use_signal(|| None::<AnalysisPayload>);
    let mut generation = use_signal(|| 0u64);
    let notices = try_use_context::<Coroutine<NoticeEvent>>();

    let on_complete = move |(payload, notice): (AnalysisPayload, NoticeId)| {
        results.set(Some(payload));
        generation += 1;
        // The success toast has served its purpose once the results are shown.
        if let Some(host) = notices {
            host.send(NoticeEvent::Dismiss(notice));
        }
    };
    let on_error = move |_: UploadError| results.set(None);

    // A new attempt discards the previous analysis.
    use_effect(move || {
        if state().uploading && results.peek().is_some() {
            results.set(None);
        }
    });
    let shown = displayed_result(state(), results());

    rsx! {
        section { class: "page page-upload",
            header { class: "page__header",
                h1 { {crate::t!("upload-title")} }
                p { class: "page__lede", {crate::t!("upload-lede")} }
            }

            div { class: "upload-layout",
                DocumentUpload { state, on_complete, on_error }
                UploadGuidance {}
            }

            if state().uploading {
                div { class: "processing", role: "status",
                    div { class: "spinner", aria_hidden: "true" }
                    span { {crate::t!("upload-processing")} }
                }
            }

            if let Some(payload) = shown {
                AnalysisResults { key: "{generation}", results: payload }
            }
        }
    }
}

/// Results are never shown next to a running upload.
fn displayed_result(
    state: UploadState,
    results: Option<AnalysisPayload>,
) -> Option<AnalysisPayload> {
    if state.uploading {
        None
    } else {
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_upload_hides_previous_result() {
        let previous = Some(AnalysisPayload::default());
        assert_eq!(displayed_result(UploadState::started(), previous.clone()), None);
        assert_eq!(
            displayed_result(UploadState::started().advanced().advanced(), previous.clone()),
            None
        );
        assert_eq!(displayed_result(UploadState::idle(), previous.clone()), previous);
        assert_eq!(displayed_result(UploadState::idle(), None), None);
    }
}
