use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AdminDashboardPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <Title text="Admin | Gate Pass" />
        <AdminDashboardPanel />
    }
}
