//! Library side of the `qbank` command line tool.
//!
//! Holds the pieces integration tests drive directly: configuration
//! loading, logging setup, and the upload service.

pub mod config;
pub mod logging;
pub mod upload;
