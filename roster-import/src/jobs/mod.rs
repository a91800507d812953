pub mod import_manager;
