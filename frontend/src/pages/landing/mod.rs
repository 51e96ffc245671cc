use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LandingPanel;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Visitor Request | Gate Pass" />
        <LandingPanel />
    }
}
