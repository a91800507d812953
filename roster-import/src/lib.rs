pub mod config;
pub mod database;
pub mod error;
pub mod helpers;
pub mod jobs;
pub mod storage;
pub mod telemetry;

pub use database::Database;
pub use error::ImportError;
pub use jobs::import_manager::ImportManager;
