//! Report module - review card, results and catalog output

pub mod catalog;
pub mod summary;

pub use catalog::*;
pub use summary::*;
