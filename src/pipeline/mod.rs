//! Pipeline module - wizard state machine and simulated run

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod notice;
pub mod results;
pub mod runner;
pub mod selection;
pub mod state;

pub use catalog::*;
pub use dataset::*;
pub use error::WizardError;
pub use notice::*;
pub use results::*;
pub use runner::*;
pub use selection::*;
pub use state::*;
