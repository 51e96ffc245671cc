use crate::{
    api::TimeSlot,
    components::{
        empty_state::EmptyRow,
        forms::{DANGER_BUTTON_CLASS, LINK_BUTTON_CLASS},
    },
    utils::time::short_time,
};
use leptos::*;

#[component]
pub fn TimeSlotTable(
    #[prop(into)] items: Signal<Vec<TimeSlot>>,
    on_edit: Callback<TimeSlot>,
    on_delete: Callback<TimeSlot>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"From"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"To"</th>
                    <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! { <EmptyRow colspan=4 message="No time slots found." /> }.into_view();
                    }
                    rows.into_iter()
                        .map(|slot| {
                            let for_edit = slot.clone();
                            let for_delete = slot.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm font-medium text-fg">{slot.name}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{short_time(&slot.from)}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{short_time(&slot.to)}</td>
                                    <td class="px-4 py-3 text-sm text-right space-x-3">
                                        <button class=LINK_BUTTON_CLASS on:click=move |_| on_edit.call(for_edit.clone())>
                                            "Edit"
                                        </button>
                                        <button class=DANGER_BUTTON_CLASS on:click=move |_| on_delete.call(for_delete.clone())>
                                            "Delete"
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
