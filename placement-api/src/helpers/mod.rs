pub mod application_id;
pub mod database;
pub mod response;
