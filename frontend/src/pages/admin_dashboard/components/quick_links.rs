use crate::pages::admin_dashboard::utils::QUICK_LINKS;
use leptos::*;

#[component]
pub fn QuickLinks() -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Quick Actions"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {QUICK_LINKS
                    .iter()
                    .map(|link| view! {
                        <a
                            href=link.href
                            class="block rounded-md border border-border p-4 hover:bg-surface-muted"
                        >
                            <p class="text-sm font-medium text-fg">{link.label}</p>
                            <p class="text-xs text-fg-muted">{link.description}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
