use crate::{
    api::VisitorRequest,
    components::{empty_state::EmptyState, status::RequestStatusBadge},
    utils::time::display_date,
};
use leptos::*;

#[component]
pub fn RequestList(#[prop(into)] items: Signal<Vec<VisitorRequest>>) -> impl IntoView {
    view! {
        {move || {
            let rows = items.get();
            if rows.is_empty() {
                return view! {
                    <EmptyState
                        title="No requests yet"
                        description="Requests you submit or that are assigned to you appear here."
                    />
                }
                .into_view();
            }
            view! {
                <ul class="divide-y divide-border">
                    {rows
                        .into_iter()
                        .map(|request| {
                            let status = request.status_kind();
                            view! {
                                <li class="flex items-center justify-between px-4 py-3">
                                    <div>
                                        <p class="text-sm font-medium text-fg">{request.name}</p>
                                        <p class="text-xs text-fg-muted">
                                            {request.warehouse_name}" · "{display_date(&request.date)}
                                        </p>
                                    </div>
                                    <RequestStatusBadge status=status />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_view()
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn list_renders_rows_or_empty_state() {
        let html = render_to_string(move || {
            let items: Vec<VisitorRequest> = serde_json::from_value(json!([
                { "id": "v1", "name": "Vera", "status": "rejected", "warehouse": { "id": "w1", "name": "North" } }
            ]))
            .unwrap();
            view! { <RequestList items=Signal::derive(move || items.clone()) /> }
        });
        assert!(html.contains("Vera"));
        assert!(html.contains("Rejected"));

        let empty = render_to_string(move || view! { <RequestList items=Signal::derive(Vec::new) /> });
        assert!(empty.contains("No requests yet"));
    }
}
