//! HTTP request handlers organized by domain.

pub mod listing_handler;
pub mod reference_handler;

pub use listing_handler::*;
pub use reference_handler::*;
