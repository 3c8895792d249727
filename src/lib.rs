//! Pipebuilder: Text-Classification Pipeline Wizard
//!
//! A library for configuring a text-classification pipeline step by step
//! and running a simulated execution of it.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
