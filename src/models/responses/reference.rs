//! Reference data response served by the configs list endpoint.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lookup tables used to populate directory search forms
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigsList {
    #[schema(value_type = Vec<Object>)]
    pub top_companies_by_regions: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub top_companies_by_shipment_types: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub truck_types: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub shipment_types: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub specialized_services: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub freights: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub safety_ratings: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub operations: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub insurance_minimum: Vec<Document>,
    #[schema(value_type = Vec<Object>)]
    pub authority_maintained: Vec<Document>,
}
