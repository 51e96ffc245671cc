use crate::api::ApiError;
use leptos::*;

fn detail_lines(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|entry| {
                    entry
                        .as_str()
                        .map(str::to_string)
                        .or_else(|| entry.get("msg").and_then(|m| m.as_str()).map(str::to_string))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Error banner for a failed form submission or load.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let lines = error.get().map(|e| detail_lines(&e)).unwrap_or_default();
                    (!lines.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

/// Message under a single form field.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <p class="mt-1 text-xs text-status-error-text">{text}</p>
        })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_detail_lines() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "HTTP_400".into(),
                details: Some(json!({
                    "errors": ["Name is required", { "msg": "Email is invalid" }]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Name is required"));
        assert!(html.contains("Email is invalid"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn field_error_renders_message() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("Phone is required".to_string()));
            view! { <FieldError message=message /> }
        });
        assert!(html.contains("Phone is required"));
    }
}
