use utoipa::OpenApi;

use crate::models::{ConfigsList, ErrorResponse, HealthResponse, PageResult, SortOrder};

/// OpenAPI documentation for the Carrier Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carrier Directory API",
        version = "0.1.0",
        description = "Read API for the freight carrier directory: paginated, filterable listings of carriers, blog posts and geography, plus the reference tables behind the search forms.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Reference", description = "Lookup tables for search forms"),
        (name = "Geography", description = "Countries, states and cities"),
        (name = "Carriers", description = "Carrier directory listings"),
        (name = "Blogs", description = "Published blog posts")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_configs_list,
        crate::handlers::list_countries,
        crate::handlers::list_states,
        crate::handlers::list_cities,
        crate::handlers::list_carriers,
        crate::handlers::list_blogs
    ),
    components(
        schemas(
            PageResult,
            ConfigsList,
            SortOrder,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
