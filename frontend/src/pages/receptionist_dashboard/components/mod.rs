pub mod table;
pub mod visit_modal;
