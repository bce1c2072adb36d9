//! Request models for API endpoints.

pub mod page;

pub use page::*;
