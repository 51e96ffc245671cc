pub mod form_modal;
pub mod table;
