pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Browser entry point: installs the panic hook and logger, resolves the
/// runtime config, then mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting Gate Pass frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
        router::mount_app();
    });
}
