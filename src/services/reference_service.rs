//! Reference data: small lookup tables returned whole, ordered by `id`.

use std::sync::Arc;

use log::debug;
use mongodb::bson::Document;

use crate::constants::{
    COLLECTION_AUTHORITY_MAINTAINED, COLLECTION_FREIGHT, COLLECTION_INSURANCE_MINIMUM,
    COLLECTION_OPERATION, COLLECTION_SAFETY_RATING, COLLECTION_SHIPMENT_TYPE,
    COLLECTION_SPECIALIZED_SERVICE, COLLECTION_TOP_COMPANIES_BY_REGION,
    COLLECTION_TOP_COMPANIES_BY_SHIPMENT_TYPE, COLLECTION_TRUCK_TYPE, REFERENCE_SORT_FIELD,
};
use crate::errors::ApiError;
use crate::models::{ConfigsList, FindQuery, SortOrder, SortSpec};
use crate::repositories::DocumentStore;

pub struct ReferenceService {
    store: Arc<dyn DocumentStore>,
}

impl ReferenceService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn table(&self, collection: &str) -> Result<Vec<Document>, ApiError> {
        let query = FindQuery {
            sort: Some(SortSpec {
                field: REFERENCE_SORT_FIELD.to_string(),
                order: SortOrder::Asc,
            }),
            ..Default::default()
        };
        self.store.find(collection, &query).await
    }

    /// Fetch every reference table concurrently. One failure fails the whole list.
    pub async fn configs_list(&self) -> Result<ConfigsList, ApiError> {
        debug!("Fetching reference tables for configs list");

        let (
            top_companies_by_regions,
            top_companies_by_shipment_types,
            truck_types,
            shipment_types,
            specialized_services,
            freights,
            safety_ratings,
            operations,
            insurance_minimum,
            authority_maintained,
        ) = futures::try_join!(
            self.table(COLLECTION_TOP_COMPANIES_BY_REGION),
            self.table(COLLECTION_TOP_COMPANIES_BY_SHIPMENT_TYPE),
            self.table(COLLECTION_TRUCK_TYPE),
            self.table(COLLECTION_SHIPMENT_TYPE),
            self.table(COLLECTION_SPECIALIZED_SERVICE),
            self.table(COLLECTION_FREIGHT),
            self.table(COLLECTION_SAFETY_RATING),
            self.table(COLLECTION_OPERATION),
            self.table(COLLECTION_INSURANCE_MINIMUM),
            self.table(COLLECTION_AUTHORITY_MAINTAINED),
        )?;

        Ok(ConfigsList {
            top_companies_by_regions,
            top_companies_by_shipment_types,
            truck_types,
            shipment_types,
            specialized_services,
            freights,
            safety_ratings,
            operations,
            insurance_minimum,
            authority_maintained,
        })
    }
}
