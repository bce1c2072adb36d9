//! Middleware configuration for the HTTP server.

pub mod rate_limiter;

pub use rate_limiter::*;
