// Users domain services
pub mod profile_service;
pub mod state;

pub use profile_service::*;
pub use state::*;
