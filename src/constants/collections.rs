//! MongoDB collection names.

// Geography
pub const COLLECTION_COUNTRIES: &str = "countries";
pub const COLLECTION_STATES: &str = "states";
pub const COLLECTION_CITIES: &str = "cities";

// Directory content
pub const COLLECTION_CARRIERS: &str = "carriers";
pub const COLLECTION_BLOGS: &str = "blogs";

// Reference data served by the configs list
pub const COLLECTION_TOP_COMPANIES_BY_REGION: &str = "top-companies-by-region";
pub const COLLECTION_TOP_COMPANIES_BY_SHIPMENT_TYPE: &str = "top-companies-by-shipment-type";
pub const COLLECTION_TRUCK_TYPE: &str = "truck-type";
pub const COLLECTION_SHIPMENT_TYPE: &str = "shipment-type";
pub const COLLECTION_SPECIALIZED_SERVICE: &str = "specialized-service";
pub const COLLECTION_FREIGHT: &str = "freight";
pub const COLLECTION_SAFETY_RATING: &str = "safety-rating";
pub const COLLECTION_OPERATION: &str = "operation";
pub const COLLECTION_INSURANCE_MINIMUM: &str = "insurance-minimum";
pub const COLLECTION_AUTHORITY_MAINTAINED: &str = "authority-maintained";
