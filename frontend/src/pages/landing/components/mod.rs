pub mod accompanying;
pub mod visitor_form;
