// Auth domain services
pub mod auth_service;
pub mod jwt_service;
pub mod state;

pub use auth_service::*;
pub use jwt_service::*;
pub use state::*;
