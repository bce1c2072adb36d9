//! Reference data handler.

use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::ApiError;
use crate::services::ReferenceService;

/// Get every reference table used by directory search forms
///
/// Truck types, shipment types, freights, safety ratings and the other lookup
/// tables, each ordered by `id`.
#[utoipa::path(
    get,
    path = "/api/configs-list",
    tag = "Reference",
    responses(
        (status = 200, description = "All reference tables", body = crate::models::ConfigsList),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_configs_list(
    reference_service: web::Data<ReferenceService>,
) -> Result<HttpResponse, ApiError> {
    let configs = reference_service.configs_list().await?;
    info!("Served configs list");
    Ok(HttpResponse::Ok().json(configs))
}
