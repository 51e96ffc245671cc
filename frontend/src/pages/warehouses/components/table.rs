use crate::{
    api::Warehouse,
    components::{empty_state::EmptyRow, forms::LINK_BUTTON_CLASS, status::ActiveBadge},
};
use leptos::*;

#[component]
pub fn WarehouseTable(
    #[prop(into)] items: Signal<Vec<Warehouse>>,
    on_edit: Callback<Warehouse>,
    on_toggle: Callback<Warehouse>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Location"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                    <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! { <EmptyRow colspan=4 message="No warehouses found." /> }.into_view();
                    }
                    rows.into_iter()
                        .map(|warehouse| {
                            let for_edit = warehouse.clone();
                            let for_toggle = warehouse.clone();
                            let toggle_label = if warehouse.is_active { "Disable" } else { "Enable" };
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm font-medium text-fg">{warehouse.name}</td>
                                    <td class="px-4 py-3 text-sm text-fg-muted">{warehouse.location}</td>
                                    <td class="px-4 py-3 text-sm"><ActiveBadge active=warehouse.is_active /></td>
                                    <td class="px-4 py-3 text-sm text-right space-x-3">
                                        <button class=LINK_BUTTON_CLASS on:click=move |_| on_edit.call(for_edit.clone())>
                                            "Edit"
                                        </button>
                                        <button class=LINK_BUTTON_CLASS on:click=move |_| on_toggle.call(for_toggle.clone())>
                                            {toggle_label}
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
