//! Platform glue that differs between the browser and native webviews.

/// Full page reload. Returns `false` where no page exists to reload (native
/// webviews are re-rendered by the caller instead).
pub fn reload_page() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.location().reload().is_ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
