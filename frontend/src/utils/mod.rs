pub mod location;
pub mod search;
pub mod storage;
pub mod time;
pub mod validation;
