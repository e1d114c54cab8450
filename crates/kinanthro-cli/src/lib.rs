//! kinanthro-cli
//!
//! Command-line collaborator for the anthropometry engine: configuration
//! persistence and the JSON input/report format.

pub mod config;
pub mod report;
