use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, CrashBarrier, NavBuilder, NotificationHost};
use ui::views::{DashboardPage, HistoryPage, UploadPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Upload {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/history")]
    History {},
}

// The theme lives in the shared ui crate; inline it so both launchers use one file.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_upload(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Upload {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_history(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::History {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        upload: nav_upload,
        dashboard: nav_dashboard,
        history: nav_history,
    });

    rsx! {
        document::Title { "DocIntel" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[component]
fn Upload() -> Element {
    rsx! { UploadPage {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
fn History() -> Element {
    rsx! { HistoryPage {} }
}

/// Navbar, notice host and crash barrier around the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        NotificationHost {
            div { class: "app-shell",
                AppNavbar {}
                main { class: "app-main",
                    CrashBarrier {
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
