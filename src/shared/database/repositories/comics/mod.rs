// Comic repositories
pub mod chapter_repository;
pub mod comic_repository;

pub use chapter_repository::*;
pub use comic_repository::*;
