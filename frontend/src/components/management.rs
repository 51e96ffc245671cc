use crate::{
    api::ActiveFilter,
    components::{
        confirm_dialog::ConfirmDialog,
        forms::{SearchInput, PRIMARY_BUTTON_CLASS},
        status::ActiveFilterToggle,
    },
};
use leptos::*;

/// An enable/disable request waiting on the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTarget {
    pub id: String,
    pub name: String,
    pub enable: bool,
}

impl ToggleTarget {
    pub fn for_entity(id: &str, name: &str, currently_active: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            enable: !currently_active,
        }
    }

    fn verb(&self) -> &'static str {
        if self.enable {
            "enable"
        } else {
            "disable"
        }
    }

    pub fn title(&self, noun: &str) -> String {
        let verb = if self.enable { "Enable" } else { "Disable" };
        format!("{} {}", verb, noun)
    }

    pub fn message(&self, noun: &str) -> String {
        format!(
            "Are you sure you want to {} the {} \"{}\"?",
            self.verb(),
            noun.to_lowercase(),
            self.name
        )
    }

    pub fn success_message(&self, noun: &str) -> String {
        format!("{} {}d successfully.", noun, self.verb())
    }
}

/// Filter toggle, search box, and create button shared by the soft-delete pages.
#[component]
pub fn ManagementToolbar(
    filter: RwSignal<ActiveFilter>,
    search: RwSignal<String>,
    #[prop(into)] add_label: String,
    on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
            <ActiveFilterToggle filter=filter />
            <div class="flex flex-col sm:flex-row gap-2">
                <SearchInput term=search />
                <button class=PRIMARY_BUTTON_CLASS on:click=move |_| on_add.call(())>
                    {add_label}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ToggleConfirm(
    target: RwSignal<Option<ToggleTarget>>,
    noun: &'static str,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: Callback<ToggleTarget>,
) -> impl IntoView {
    let is_open = Signal::derive(move || target.with(Option::is_some));
    let title = Signal::derive(move || {
        target.with(|t| t.as_ref().map(|t| t.title(noun)).unwrap_or_default())
    });
    let message = Signal::derive(move || {
        target.with(|t| t.as_ref().map(|t| t.message(noun)).unwrap_or_default())
    });
    let confirm_label = Signal::derive(move || {
        target.with(|t| match t {
            Some(t) if t.enable => "Enable".to_string(),
            _ => "Disable".to_string(),
        })
    });

    view! {
        <ConfirmDialog
            is_open=is_open
            title=title
            message=message
            confirm_label=confirm_label
            confirm_disabled=pending
            on_confirm=Callback::new(move |_| {
                if let Some(selected) = target.get_untracked() {
                    on_confirm.call(selected);
                }
            })
            on_cancel=Callback::new(move |_| target.set(None))
        />
    }
}
