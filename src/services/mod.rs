//! Services organized by domain concern.

pub mod query_service;
pub mod reference_service;

pub use query_service::QueryService;
pub use reference_service::ReferenceService;
