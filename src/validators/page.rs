//! Custom validators for pagination query parameters.

use validator::ValidationError;

use crate::constants::{ERR_INVALID_LIMIT, ERR_INVALID_ORDER, ERR_INVALID_PAGE};
use crate::models::SortOrder;

/// Parse a strictly positive integer. Signs, blanks and zero are rejected.
pub fn parse_positive(value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validates that `page` is a positive integer.
pub fn validate_page_number(value: &str) -> Result<(), ValidationError> {
    parse_positive(value)
        .map(|_| ())
        .ok_or_else(|| invalid("invalid_page", ERR_INVALID_PAGE))
}

/// Validates that `limit` is a positive integer.
pub fn validate_page_size(value: &str) -> Result<(), ValidationError> {
    parse_positive(value)
        .map(|_| ())
        .ok_or_else(|| invalid("invalid_limit", ERR_INVALID_LIMIT))
}

/// Validates that `order` is `asc` or `desc`.
pub fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    SortOrder::parse(value)
        .map(|_| ())
        .ok_or_else(|| invalid("invalid_order", ERR_INVALID_ORDER))
}
