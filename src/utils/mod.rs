//! Utility functions and helpers
//!
//! This module contains filename and file size helpers and logging setup.

pub mod file;
pub mod logging;

pub use file::{format_file_size, get_file_type, mebibytes};
pub use logging::init_logging;
