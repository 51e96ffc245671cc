use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::UserDashboardPanel;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <Title text="My Requests | Gate Pass" />
        <UserDashboardPanel />
    }
}
