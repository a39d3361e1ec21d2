//! HTTP handlers for categories, questions, and quiz play.

pub mod categories;
pub mod questions;
pub mod quiz;
pub use categories::*;
pub use questions::*;
pub use quiz::*;
