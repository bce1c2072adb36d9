//! Generic paginated query over any listable collection.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::errors::ApiError;
use crate::models::{ListingProfile, PageRequest, PageResult};
use crate::repositories::DocumentStore;

pub struct QueryService {
    store: Arc<dyn DocumentStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Run one page of a listing.
    ///
    /// `raw` is the request's query string as-is. The count and the page fetch
    /// run concurrently; if either fails the whole call fails.
    pub async fn paginate(
        &self,
        profile: &ListingProfile,
        raw: HashMap<String, String>,
    ) -> Result<PageResult, ApiError> {
        let request = PageRequest::from_query(profile, raw)?;
        let find = request.find_query();

        debug!(
            "Paginating '{}': page {}, limit {}, sort {:?}, {} filter(s)",
            profile.collection,
            request.page,
            request.limit,
            request.sort,
            request.filters.len()
        );

        let (total_count, data) = futures::try_join!(
            self.store.count(profile.collection, &request.filters),
            self.store.find(profile.collection, &find),
        )?;

        Ok(PageResult::new(total_count, request.page, request.limit, data))
    }
}
