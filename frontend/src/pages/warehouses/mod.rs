use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::WarehousesPanel;

#[component]
pub fn WarehousesPage() -> impl IntoView {
    view! {
        <Title text="Warehouses | Gate Pass" />
        <WarehousesPanel />
    }
}
