use dioxus::prelude::*;
use tracing::error;

use crate::core::platform;

/// Renders `children`; if any of them fails, shows a failure panel instead.
/// "Reload Page" reloads the page on the web and clears the fault elsewhere.
#[component]
pub fn CrashBarrier(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let message = errors
                    .errors()
                    .iter()
                    .map(|err| err.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                error!(%message, "view crashed");

                rsx! {
                    section { class: "card crash-panel", role: "alert",
                        h2 { class: "crash-panel__title", "Something went wrong" }
                        pre { class: "crash-panel__detail", "{message}" }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| {
                                if !platform::reload_page() {
                                    errors.clear_errors();
                                }
                            },
                            "Reload Page"
                        }
                    }
                }
            },
            {children}
        }
    }
}
