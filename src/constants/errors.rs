//! Error message constants used throughout the application.

// Generic errors
pub const ERR_INTERNAL: &str = "Internal server error";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";

// Pagination errors
pub const ERR_INVALID_PAGE: &str = "page must be a positive integer";
pub const ERR_INVALID_LIMIT: &str = "limit must be a positive integer";
pub const ERR_INVALID_ORDER: &str = "order must be either 'asc' or 'desc'";
pub const ERR_PAGE_OUT_OF_RANGE: &str = "page is out of range for the requested limit";
