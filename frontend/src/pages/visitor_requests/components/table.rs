use crate::{
    api::VisitorRequest,
    components::{empty_state::EmptyRow, status::RequestStatusBadge},
    pages::visitor_requests::utils::join_companions,
    utils::time::{display_date, short_time},
};
use leptos::*;

const HEADERS: [&str; 13] = [
    "Name",
    "Email",
    "Phone",
    "Date",
    "Status",
    "Visitor Type",
    "Warehouse",
    "Time Slot",
    "From",
    "To",
    "Accompanying Name",
    "Accompanying Phone",
    "Accompanying Email",
];

#[component]
pub fn VisitorRequestTable(#[prop(into)] items: Signal<Vec<VisitorRequest>>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    {HEADERS.iter().map(|label| view! {
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase whitespace-nowrap">
                            {*label}
                        </th>
                    }).collect_view()}
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! {
                            <EmptyRow colspan={HEADERS.len() as u32} message="No visitor requests found." />
                        }.into_view();
                    }
                    rows.into_iter().map(|item| {
                        let status = item.status_kind();
                        let names = join_companions(&item.accompanying, |p| p.name.as_str());
                        let phones = join_companions(&item.accompanying, |p| p.phone.as_str());
                        let emails = join_companions(&item.accompanying, |p| p.email.as_str());
                        view! {
                            <tr class="text-sm text-fg-muted whitespace-nowrap">
                                <td class="px-4 py-3 font-medium text-fg">{item.name}</td>
                                <td class="px-4 py-3">{item.email}</td>
                                <td class="px-4 py-3">{item.phone}</td>
                                <td class="px-4 py-3">{display_date(&item.date)}</td>
                                <td class="px-4 py-3"><RequestStatusBadge status=status /></td>
                                <td class="px-4 py-3">{item.visitor_type_name}</td>
                                <td class="px-4 py-3">{item.warehouse_name}</td>
                                <td class="px-4 py-3">{item.time_slot_name}</td>
                                <td class="px-4 py-3">{short_time(&item.from)}</td>
                                <td class="px-4 py-3">{short_time(&item.to)}</td>
                                <td class="px-4 py-3">{names}</td>
                                <td class="px-4 py-3">{phones}</td>
                                <td class="px-4 py-3">{emails}</td>
                            </tr>
                        }
                    }).collect_view()
                }}
            </tbody>
        </table>
    }
}
