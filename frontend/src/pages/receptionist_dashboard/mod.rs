use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ReceptionDashboardPanel;

#[component]
pub fn ReceptionDashboardPage() -> impl IntoView {
    view! {
        <Title text="Reception | Gate Pass" />
        <ReceptionDashboardPanel />
    }
}
