use domain_inventory::{categories, products, suppliers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Categories, suppliers and products, with stock levels"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/categories", api = categories::handlers::ApiDoc),
        (path = "/suppliers", api = suppliers::handlers::ApiDoc),
        (path = "/products", api = products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
