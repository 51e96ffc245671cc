//! Browser location helpers. All of them are no-ops without a `window`.

/// The browser window; always `None` on host builds, where web-sys imports
/// cannot be called.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Option<web_sys::Window> {
    None
}

/// Path plus query string of the current page, e.g. `/users?tab=1`.
pub fn current_path() -> Option<String> {
    let location = window()?.location();
    let pathname = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{}{}", pathname, search))
}

pub fn current_pathname() -> Option<String> {
    window()?.location().pathname().ok()
}

pub fn navigate(href: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.location().set_href(href) {
            log::warn!("navigation to {} failed: {:?}", href, err);
        }
    }
}

/// Browser `confirm()`; answers `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
