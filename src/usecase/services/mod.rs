pub mod import_service;
pub mod submit_service;
