use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::VisitorTypesPanel;

#[component]
pub fn VisitorTypesPage() -> impl IntoView {
    view! {
        <Title text="Visitor Types | Gate Pass" />
        <VisitorTypesPanel />
    }
}
