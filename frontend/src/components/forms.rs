use leptos::ev::KeyboardEvent;
use leptos::*;

pub const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-action-primary-bg";
pub const PRIMARY_BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";
pub const SECONDARY_BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50";
pub const DANGER_BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md px-3 py-1.5 text-xs font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50";
pub const LINK_BUTTON_CLASS: &str =
    "text-sm font-medium text-action-primary-bg hover:underline disabled:opacity-50";

#[component]
pub fn SearchInput(
    term: RwSignal<String>,
    #[prop(into, default = "Search...".to_string())] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="w-full sm:w-72 rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm"
            placeholder=placeholder
            prop:value=move || term.get()
            on:input=move |ev| term.set(event_target_value(&ev))
        />
    }
}

/// Labelled text input bound to a signal-backed form field.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = "text".to_string())] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                min=min
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[61] w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
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
    fn modal_renders_children_when_open() {
        let html = render_to_string(move || {
            view! {
                <Modal is_open=Signal::derive(|| true) title="Add Warehouse" on_close=Callback::new(|_| {})>
                    <p>"modal-body"</p>
                </Modal>
            }
        });
        assert!(html.contains("Add Warehouse"));
        assert!(html.contains("modal-body"));
    }

    #[test]
    fn modal_title_follows_signal() {
        let html = render_to_string(move || {
            let editing = create_rw_signal(false);
            editing.set(true);
            let title = Signal::derive(move || {
                if editing.get() { "Edit Warehouse" } else { "Add Warehouse" }.to_string()
            });
            view! {
                <Modal is_open=Signal::derive(|| true) title=title on_close=Callback::new(|_| {})>
                    <p>"modal-body"</p>
                </Modal>
            }
        });
        assert!(html.contains("Edit Warehouse"));
        assert!(!html.contains("Add Warehouse"));
    }

    #[test]
    fn modal_hidden_when_closed() {
        let html = render_to_string(move || {
            view! {
                <Modal is_open=Signal::derive(|| false) title="Add Warehouse" on_close=Callback::new(|_| {})>
                    <p>"modal-body"</p>
                </Modal>
            }
        });
        assert!(!html.contains("modal-body"));
    }

    #[test]
    fn search_and_text_inputs_reflect_values() {
        let html = render_to_string(move || {
            let term = create_rw_signal("north".to_string());
            let name = create_rw_signal("Dock A".to_string());
            view! {
                <div>
                    <SearchInput term=term placeholder="Search warehouses..." />
                    <TextField label="Name" value=name on_input=Callback::new(move |v| name.set(v)) required=true />
                </div>
            }
        });
        assert!(html.contains("Search warehouses..."));
        assert!(html.contains("Name"));
        assert!(html.contains("*"));
    }
}
