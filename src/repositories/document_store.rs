use async_trait::async_trait;
use mongodb::bson::Document;

use crate::errors::ApiError;
use crate::models::{FilterCondition, FindQuery};

/// Read access to named collections of opaque documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Count documents in `collection` matching every condition.
    async fn count(&self, collection: &str, filters: &[FilterCondition])
        -> Result<u64, ApiError>;

    /// Fetch documents in `collection` matching the query's conditions,
    /// sorted, then windowed by skip and limit.
    async fn find(&self, collection: &str, query: &FindQuery) -> Result<Vec<Document>, ApiError>;
}
