use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::WorkflowsPanel;

#[component]
pub fn WorkflowsPage() -> impl IntoView {
    view! {
        <Title text="Workflow Management | Gate Pass" />
        <WorkflowsPanel />
    }
}
