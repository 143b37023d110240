//! Shared UI crate for DocIntel: upload flow, results rendering, dashboard
//! and shell components used by both the web and desktop launchers.

pub mod core;
pub mod i18n;
pub mod results;
pub mod upload;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub mod crash_barrier;
    pub mod notifications;

    pub use app_navbar::{register_nav, AppNavbar, NavBuilder};
    pub use crash_barrier::CrashBarrier;
    pub use notifications::NotificationHost;
}
