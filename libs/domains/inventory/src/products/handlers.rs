use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch},
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{Product, ProductRequest, StockUpdate};
use super::repository::ProductRepository;
use super::service::ProductService;
use crate::categories::{Category, CategoryRepository};
use crate::error::InventoryResult;
use crate::suppliers::{Supplier, SupplierRepository};

const TAG: &str = "products";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        update_stock,
    ),
    components(
        schemas(Product, ProductRequest, StockUpdate, Category, Supplier),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "Products with their category and supplier"))
)]
pub struct ApiDoc;

pub fn router<P, C, S>(service: ProductService<P, C, S>) -> Router
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    S: SupplierRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/stock", patch(update_stock))
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<P, C, S>(
    State(service): State<Arc<ProductService<P, C, S>>>,
) -> InventoryResult<Json<Vec<Product>>>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    Ok(Json(service.list_products().await?))
}

/// Create a product. Unknown or missing category/supplier ids are a 400.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<P, C, S>(
    State(service): State<Arc<ProductService<P, C, S>>>,
    JsonBody(input): JsonBody<ProductRequest>,
) -> InventoryResult<Json<Product>>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    Ok(Json(service.create_product(input).await?))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<P, C, S>(
    State(service): State<Arc<ProductService<P, C, S>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Product>>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    Ok(Json(service.get_product(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<P, C, S>(
    State(service): State<Arc<ProductService<P, C, S>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<ProductRequest>,
) -> InventoryResult<Json<Product>>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    Ok(Json(service.update_product(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<P, C, S>(
    State(service): State<Arc<ProductService<P, C, S>>>,
    IdPath(id): IdPath,
) -> InventoryResult<StatusCode>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set the stock level of a product
#[utoipa::path(
    patch,
    path = "/{id}/stock",
    tag = TAG,
    params(("id" = i64, Path, description = "Product id")),
    request_body = StockUpdate,
    responses(
        (status = 200, description = "Stock updated", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_stock<P, C, S>(
    State(service): State<Arc<ProductService<P, C, S>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<StockUpdate>,
) -> InventoryResult<Json<Product>>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    Ok(Json(service.update_stock(id, input.quantity_stock).await?))
}
