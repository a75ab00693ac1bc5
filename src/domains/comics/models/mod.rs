// Comics domain models
pub mod chapter;
pub mod comic;

pub use chapter::*;
pub use comic::*;
