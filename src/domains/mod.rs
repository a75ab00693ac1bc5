// Business domains
pub mod auth;
pub mod comics;
pub mod users;
pub mod wallet;
