//! Small helpers with no better home.

pub mod log_sanitizer;

pub use log_sanitizer::*;
