use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Like [`with_runtime`] but resources never start their fetchers, for view
/// models whose resources would otherwise need an executor.
pub fn with_suppressed_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` inside a `<Router>` positioned at `url`, so router hooks
/// such as `use_query_map` resolve.
pub fn render_in_router<F, N>(url: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

    let path = url.to_string();
    render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path }));
        view! { <Router>{view()}</Router> }
    })
}
