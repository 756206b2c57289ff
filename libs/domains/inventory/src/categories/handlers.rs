use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{Category, CategoryRequest};
use super::repository::CategoryRepository;
use super::service::CategoryService;
use crate::error::InventoryResult;
use crate::products::ProductRepository;

const TAG: &str = "categories";

#[derive(OpenApi)]
#[openapi(
    paths(list_categories, create_category, get_category, update_category, delete_category),
    components(
        schemas(Category, CategoryRequest),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Product categories"))
)]
pub struct ApiDoc;

pub fn router<C, P>(service: CategoryService<C, P>) -> Router
where
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(Arc::new(service))
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
) -> InventoryResult<Json<Vec<Category>>> {
    Ok(Json(service.list_categories().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category created", body = Category),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    JsonBody(input): JsonBody<CategoryRequest>,
) -> InventoryResult<Json<Category>> {
    Ok(Json(service.create_category(input).await?))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Category>> {
    Ok(Json(service.get_category(id).await?))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<CategoryRequest>,
) -> InventoryResult<Json<Category>> {
    Ok(Json(service.update_category(id, input).await?))
}

/// Delete a category. Absent ids are accepted; categories still used by a
/// product are refused.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    IdPath(id): IdPath,
) -> InventoryResult<StatusCode> {
    service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
