//! Pagination constants for list endpoints.

/// Default number of items per page for general listings.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Default number of items per page for small reference tables.
pub const DEFAULT_REFERENCE_PAGE_SIZE: u64 = 100;

/// Maximum allowed items per page; larger requests are clamped.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// Reserved query keys; everything else is a filter condition.
pub const QUERY_KEY_PAGE: &str = "page";
pub const QUERY_KEY_LIMIT: &str = "limit";
pub const QUERY_KEY_SORT: &str = "sort";
pub const QUERY_KEY_ORDER: &str = "order";

/// Sort field used for every reference-data collection.
pub const REFERENCE_SORT_FIELD: &str = "id";
