use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::TimeSlotsPanel;

#[component]
pub fn TimeSlotsPage() -> impl IntoView {
    view! {
        <Title text="Time Slots | Gate Pass" />
        <TimeSlotsPanel />
    }
}
