pub mod database;
pub mod notes;
pub mod phone;
