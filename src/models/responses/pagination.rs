//! Pagination response models.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page envelope returned by every listing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Total number of pages
    #[schema(example = 2)]
    pub total_pages: u64,
    /// Total number of matching records
    #[schema(example = 13)]
    pub total_count: u64,
    /// Current page number
    #[schema(example = 1)]
    pub current_page: u64,
    /// Records on this page, in store order.
    ///
    /// Records pass through as stored, so BSON-only values go out in MongoDB
    /// extended JSON: an `_id` is `{"$oid": "..."}` and a date is
    /// `{"$date": {"$numberLong": "..."}}`.
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Document>,
}

impl PageResult {
    pub fn new(total_count: u64, page: u64, limit: u64, data: Vec<Document>) -> Self {
        Self {
            total_pages: total_pages(total_count, limit),
            total_count,
            current_page: page,
            data,
        }
    }
}

/// `ceil(total_count / limit)`; zero when there is nothing to page through.
pub fn total_pages(total_count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_count.div_ceil(limit)
}
