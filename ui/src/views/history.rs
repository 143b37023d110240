use dioxus::prelude::*;

#[component]
pub fn HistoryPage() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-history",
            div { class: "card card--centered",
                h1 { {crate::t!("history-title")} }
                p { class: "card__placeholder", {crate::t!("history-coming-soon")} }
            }
        }
    }
}
