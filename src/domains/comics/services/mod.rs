// Comics domain services
pub mod chapter_service;
pub mod comic_service;
pub mod state;

pub use chapter_service::*;
pub use comic_service::*;
pub use state::*;
