use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::VisitorRequestsPanel;

#[component]
pub fn VisitorRequestsPage() -> impl IntoView {
    view! {
        <Title text="Visitor Requests | Gate Pass" />
        <VisitorRequestsPanel />
    }
}
