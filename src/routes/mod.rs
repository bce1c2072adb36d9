use actix_web::{error, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{
    CODE_BAD_REQUEST, CODE_NOT_FOUND, MSG_HEALTH_STATUS, MSG_SERVER_RUNNING,
};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::utils::sanitize_for_log;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                // Health check
                .route("/health", web::get().to(health_check))
                // OpenAPI document
                .route("/openapi.json", web::get().to(openapi_json))
                // Reference data
                .route("/configs-list", web::get().to(handlers::get_configs_list))
                // Geography
                .route("/countries", web::get().to(handlers::list_countries))
                .route("/states", web::get().to(handlers::list_states))
                .route("/cities", web::get().to(handlers::list_cities))
                // Directory content
                .route("/carriers", web::get().to(handlers::list_carriers))
                .route("/blogs", web::get().to(handlers::list_blogs))
                .default_service(web::route().to(not_found)),
        );
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    warn!("Malformed query string: {}", err);
    ApiError::BadRequest {
        code: CODE_BAD_REQUEST.to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_HEALTH_STATUS.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    warn!("No route for {} {}", req.method(), sanitize_for_log(req.path()));
    Err(ApiError::NotFound {
        code: CODE_NOT_FOUND.to_string(),
        message: format!("No route for {}", req.path()),
    })
}
