#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, CrashBarrier, NavBuilder, NotificationHost};
use ui::views::{DashboardPage, HistoryPage, UploadPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Upload {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/history")]
    History {},
}

// Always inlined; desktop builds ship without a separate assets folder.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("DocIntel – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_upload(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Upload {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_history(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::History {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected locale here; keying the router on it
    // remounts every page in the new language.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        upload: nav_upload,
        dashboard: nav_dashboard,
        history: nav_history,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
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

#[component]
fn DesktopShell() -> Element {
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
