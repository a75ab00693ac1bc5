// All repositories module
pub mod auth;
pub mod comics;
pub mod users;
pub mod wallet;

// Re-export all repositories for convenience
pub use auth::*;
pub use comics::*;
pub use users::*;
pub use wallet::*;
