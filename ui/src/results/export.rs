use dioxus::prelude::*;
use tracing::{info, warn};

use super::pdf::{analysis_report, REPORT_FILENAME};
use super::AnalysisView;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// "Download PDF" button with inline feedback.
#[component]
pub fn ReportExport(view: AnalysisView) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let mut busy = use_signal(|| false);

    let feedback = match &*status.read() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("export__meta", "Preparing PDF…".to_string())),
        ExportStatus::Done(message) => Some(("export__meta export__meta--success", message.clone())),
        ExportStatus::Error(err) => Some(("export__meta export__meta--error", err.clone())),
    };

    let on_export = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        status.set(ExportStatus::Working);
        let bytes = match analysis_report(&view) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "report build failed");
                status.set(ExportStatus::Error(err));
                busy.set(false);
                return;
            }
        };
        spawn(async move {
            match download_bytes(REPORT_FILENAME, "application/pdf", bytes).await {
                Ok(Some(path)) => {
                    info!(%path, "report saved");
                    status.set(ExportStatus::Done(format!("Saved to {path}")));
                }
                Ok(None) => status.set(ExportStatus::Done("Report downloaded".to_string())),
                Err(err) => {
                    warn!(error = %err, "report export failed");
                    status.set(ExportStatus::Error(err));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "export",
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy(),
                onclick: on_export,
                "Download PDF"
            }
            if let Some((class_name, message)) = feedback {
                span { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Hand a file to the user: a browser download on the web (returns `None`),
/// a file under the app's data directory on desktop (returns its path).
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        std::fs::write(&path, &bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "DocIntel", "DocIntel")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
