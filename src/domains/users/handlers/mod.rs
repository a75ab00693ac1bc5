// Users domain handlers
pub mod profile_handler;
