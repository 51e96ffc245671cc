use crate::{
    api::VisitorType,
    components::{empty_state::EmptyRow, forms::LINK_BUTTON_CLASS, status::ActiveBadge},
};
use leptos::*;

#[component]
pub fn VisitorTypeTable(
    #[prop(into)] items: Signal<Vec<VisitorType>>,
    on_edit: Callback<VisitorType>,
    on_toggle: Callback<VisitorType>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                    <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! { <EmptyRow colspan=3 message="No visitor types found." /> }.into_view();
                    }
                    rows.into_iter()
                        .map(|visitor_type| {
                            let for_edit = visitor_type.clone();
                            let for_toggle = visitor_type.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm font-medium text-fg">{visitor_type.name}</td>
                                    <td class="px-4 py-3 text-sm"><ActiveBadge active=visitor_type.is_active /></td>
                                    <td class="px-4 py-3 text-sm text-right space-x-3">
                                        <button class=LINK_BUTTON_CLASS on:click=move |_| on_edit.call(for_edit.clone())>
                                            "Edit"
                                        </button>
                                        <button class=LINK_BUTTON_CLASS on:click=move |_| on_toggle.call(for_toggle.clone())>
                                            {if visitor_type.is_active { "Disable" } else { "Enable" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
