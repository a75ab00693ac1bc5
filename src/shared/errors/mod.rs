// Shared errors
pub mod auth_error;
pub mod comic_error;
pub mod profile_error;
pub mod wallet_error;

pub use auth_error::*;
pub use comic_error::*;
pub use profile_error::*;
pub use wallet_error::*;
