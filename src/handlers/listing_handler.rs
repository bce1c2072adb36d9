//! Paginated listing handlers.
//!
//! Every handler passes the raw query string to [`QueryService::paginate`] with
//! its collection's listing profile; `page`, `limit`, `sort` and `order` are
//! pagination controls and every other key is a case-insensitive substring
//! filter on the field of the same name.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::debug;

use crate::errors::ApiError;
use crate::models::listing::{self, ListingProfile};
use crate::services::QueryService;

async fn list(
    query_service: &QueryService,
    profile: &ListingProfile,
    raw: HashMap<String, String>,
) -> Result<HttpResponse, ApiError> {
    let page = query_service.paginate(profile, raw).await?;
    debug!(
        "Served page {}/{} of '{}' ({} records)",
        page.current_page,
        page.total_pages,
        profile.collection,
        page.data.len()
    );
    Ok(HttpResponse::Ok().json(page))
}

/// List countries
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = "Geography",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100, max: 100)"),
        ("sort" = Option<String>, Query, description = "Sort field (default: name)"),
        ("order" = Option<String>, Query, description = "'asc' (default) or 'desc'"),
        ("name" = Option<String>, Query, description = "Substring filter on name"),
        ("iso2" = Option<String>, Query, description = "Substring filter on ISO 3166-1 alpha-2 code"),
        ("region" = Option<String>, Query, description = "Substring filter on region")
    ),
    responses(
        (status = 200, description = "Page of countries", body = crate::models::PageResult),
        (status = 400, description = "Invalid pagination or filter", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_countries(
    query_service: web::Data<QueryService>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    list(&query_service, &listing::COUNTRIES, query.into_inner()).await
}

/// List states
#[utoipa::path(
    get,
    path = "/api/states",
    tag = "Geography",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100, max: 100)"),
        ("sort" = Option<String>, Query, description = "Sort field (default: name)"),
        ("order" = Option<String>, Query, description = "'asc' (default) or 'desc'"),
        ("name" = Option<String>, Query, description = "Substring filter on name"),
        ("country_code" = Option<String>, Query, description = "Substring filter on country code")
    ),
    responses(
        (status = 200, description = "Page of states", body = crate::models::PageResult),
        (status = 400, description = "Invalid pagination or filter", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_states(
    query_service: web::Data<QueryService>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    list(&query_service, &listing::STATES, query.into_inner()).await
}

/// List cities
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = "Geography",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("sort" = Option<String>, Query, description = "Sort field (default: name)"),
        ("order" = Option<String>, Query, description = "'asc' (default) or 'desc'"),
        ("name" = Option<String>, Query, description = "Substring filter on name"),
        ("state_code" = Option<String>, Query, description = "Substring filter on state code"),
        ("country_code" = Option<String>, Query, description = "Substring filter on country code")
    ),
    responses(
        (status = 200, description = "Page of cities", body = crate::models::PageResult),
        (status = 400, description = "Invalid pagination or filter", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_cities(
    query_service: web::Data<QueryService>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    list(&query_service, &listing::CITIES, query.into_inner()).await
}

/// List carriers
///
/// Sorted by DOT number unless another field is requested.
#[utoipa::path(
    get,
    path = "/api/carriers",
    tag = "Carriers",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("sort" = Option<String>, Query, description = "Sort field (default: dotNumber)"),
        ("order" = Option<String>, Query, description = "'asc' (default) or 'desc'"),
        ("legalName" = Option<String>, Query, description = "Substring filter on legal name"),
        ("phyCity" = Option<String>, Query, description = "Substring filter on physical city"),
        ("phyState" = Option<String>, Query, description = "Substring filter on physical state"),
        ("phyCountry" = Option<String>, Query, description = "Substring filter on physical country")
    ),
    responses(
        (status = 200, description = "Page of carriers", body = crate::models::PageResult),
        (status = 400, description = "Invalid pagination or filter", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_carriers(
    query_service: web::Data<QueryService>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    list(&query_service, &listing::CARRIERS, query.into_inner()).await
}

/// List blog posts, newest first
#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "Blogs",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("sort" = Option<String>, Query, description = "Sort field (default: publishedAt)"),
        ("order" = Option<String>, Query, description = "'asc' or 'desc' (default)"),
        ("title" = Option<String>, Query, description = "Substring filter on title"),
        ("tags" = Option<String>, Query, description = "Substring filter on any tag")
    ),
    responses(
        (status = 200, description = "Page of blog posts", body = crate::models::PageResult),
        (status = 400, description = "Invalid pagination or filter", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_blogs(
    query_service: web::Data<QueryService>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    list(&query_service, &listing::BLOGS, query.into_inner()).await
}
