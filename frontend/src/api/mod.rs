mod auth;
pub mod client;
mod roles;
mod time_slots;
pub mod types;
mod users;
mod visitor_types;
mod visitors;
mod warehouses;
mod workflows;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
