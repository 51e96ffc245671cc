use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ApproverDashboardPanel;

#[component]
pub fn ApproverDashboardPage() -> impl IntoView {
    view! {
        <Title text="Approvals | Gate Pass" />
        <ApproverDashboardPanel />
    }
}
