use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl StatTone {
    fn value_class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "mt-1 text-3xl font-semibold text-fg",
            StatTone::Info => "mt-1 text-3xl font-semibold text-status-info-text",
            StatTone::Success => "mt-1 text-3xl font-semibold text-status-success-text",
            StatTone::Warning => "mt-1 text-3xl font-semibold text-status-warning-text",
            StatTone::Danger => "mt-1 text-3xl font-semibold text-status-error-text",
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(optional)] tone: StatTone,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted truncate">{label}</dt>
                <dd class=tone.value_class()>{move || value.get()}</dd>
            </div>
        </div>
    }
}
