use crate::{
    api::User,
    components::{empty_state::EmptyRow, forms::LINK_BUTTON_CLASS, status::ActiveBadge},
};
use leptos::*;

#[component]
pub fn UserTable(
    #[prop(into)] items: Signal<Vec<User>>,
    on_edit: Callback<User>,
    on_toggle: Callback<User>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Contact"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Role"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Warehouse"</th>
                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                    <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! { <EmptyRow colspan=6 message="No users found." /> }.into_view();
                    }
                    rows.into_iter()
                        .map(|user| {
                            let for_edit = user.clone();
                            let for_toggle = user.clone();
                            let toggle_label = if user.is_active { "Disable" } else { "Enable" };
                            view! {
                                <tr>
                                    <td class="px-4 py-3 text-sm font-medium text-fg">{user.name}</td>
                                    <td class="px-4 py-3 text-sm text-fg-muted">
                                        <div>{user.email}</div>
                                        <div>{user.phone}</div>
                                    </td>
                                    <td class="px-4 py-3 text-sm text-fg">{user.role}</td>
                                    <td class="px-4 py-3 text-sm text-fg">
                                        {user.warehouse_name.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="px-4 py-3 text-sm"><ActiveBadge active=user.is_active /></td>
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::approver_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_show_role_and_warehouse() {
        let html = render_to_string(move || {
            let rows = vec![approver_user()];
            view! {
                <UserTable
                    items=Signal::derive(move || rows.clone())
                    on_edit=Callback::new(|_| {})
                    on_toggle=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Approver"));
        assert!(html.contains("North Warehouse"));
        assert!(html.contains("Disable"));
    }
}
