pub mod quick_links;
