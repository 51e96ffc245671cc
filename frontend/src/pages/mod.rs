pub mod admin_dashboard;
pub mod approver_dashboard;
pub mod fallback;
pub mod landing;
pub mod login;
pub mod receptionist_dashboard;
pub mod time_slots;
pub mod user_dashboard;
pub mod users;
pub mod visitor_requests;
pub mod visitor_types;
pub mod warehouses;
pub mod workflows;
