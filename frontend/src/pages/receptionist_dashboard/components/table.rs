use crate::{
    api::VisitorRequest,
    components::{
        empty_state::EmptyRow,
        forms::LINK_BUTTON_CLASS,
        status::{RequestStatusBadge, VisitStatusBadge},
    },
    utils::time::{display_date, short_time},
};
use leptos::*;

#[component]
pub fn ReceptionTable(
    #[prop(into)] items: Signal<Vec<VisitorRequest>>,
    on_record: Callback<VisitorRequest>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Visitor"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Visitor Type"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Time Slot"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Tracking Code"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Approval"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Visit"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 message="No visitor requests found." /> }.into_view();
                        }
                        rows.into_iter().map(|request| {
                            let slot = if request.from.is_empty() {
                                request.time_slot_name.clone()
                            } else {
                                format!("{} - {}", short_time(&request.from), short_time(&request.to))
                            };
                            let status = request.status_kind();
                            let visit = request.visit_status_kind();
                            let row = request.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm text-fg">
                                        <div class="font-medium">{request.name}</div>
                                        <div class="text-xs text-fg-muted">{request.email}" · "{request.phone}</div>
                                    </td>
                                    <td class="px-4 py-3 text-sm text-fg">{request.visitor_type_name}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{display_date(&request.date)}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{slot}</td>
                                    <td class="px-4 py-3 text-sm font-mono text-fg">
                                        {request.tracking_code.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="px-4 py-3 text-sm"><RequestStatusBadge status=status /></td>
                                    <td class="px-4 py-3 text-sm"><VisitStatusBadge status=visit /></td>
                                    <td class="px-4 py-3 text-sm text-right">
                                        <button
                                            class=LINK_BUTTON_CLASS
                                            on:click=move |_| on_record.call(row.clone())
                                        >
                                            "Record Visit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn rows_show_tracking_code_and_slot() {
        let html = render_to_string(move || {
            let items: Vec<VisitorRequest> = serde_json::from_value(json!([{
                "id": "v1", "name": "Alice", "status": "approved",
                "trackingCode": "TRK-9", "from": "09:00:00", "to": "10:30:00",
                "visitStatus": "no_show"
            }]))
            .unwrap();
            view! { <ReceptionTable items=Signal::derive(move || items.clone()) on_record=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("TRK-9"));
        assert!(html.contains("09:00 - 10:30"));
        assert!(html.contains("No Show"));
        assert!(html.contains("Record Visit"));
    }

    #[test]
    fn empty_set_shows_placeholder() {
        let html = render_to_string(move || {
            view! { <ReceptionTable items=Signal::derive(Vec::new) on_record=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("No visitor requests found."));
    }
}
