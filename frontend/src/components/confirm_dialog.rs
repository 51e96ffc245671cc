use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(text: String, default: &str) -> String {
    if text.trim().is_empty() {
        default.to_string()
    } else {
        text
    }
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };

    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_text = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Disable warehouse"
                    message="Are you sure you want to disable North?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Are you sure you want to disable North?"));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Delete"
                    message="hidden-message"
                    confirm_label="Delete"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    destructive=true
                />
            }
        });
        assert!(!html.contains("hidden-message"));
    }

    #[test]
    fn dialog_text_follows_signals() {
        let html = render_to_string(move || {
            let name = create_rw_signal("North".to_string());
            name.set("South".to_string());
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title=Signal::derive(move || format!("Enable {}", name.get()))
                    message=Signal::derive(move || format!("Enable {}?", name.get()))
                    confirm_label="Enable"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Enable South"));
        assert!(html.contains("Enable South?"));
        assert!(!html.contains("North"));
    }
}
