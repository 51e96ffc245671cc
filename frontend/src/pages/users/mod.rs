use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::UsersPanel;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <Title text="Users | Gate Pass" />
        <UsersPanel />
    }
}
