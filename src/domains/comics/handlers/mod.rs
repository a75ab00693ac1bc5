// Comics domain handlers
pub mod chapter_handler;
pub mod comic_handler;
