use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{Supplier, SupplierRequest};
use super::repository::SupplierRepository;
use super::service::SupplierService;
use crate::error::InventoryResult;
use crate::products::ProductRepository;

const TAG: &str = "suppliers";

#[derive(OpenApi)]
#[openapi(
    paths(list_suppliers, create_supplier, get_supplier, update_supplier, delete_supplier),
    components(
        schemas(Supplier, SupplierRequest),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Suppliers and their tax ids"))
)]
pub struct ApiDoc;

pub fn router<S, P>(service: SupplierService<S, P>) -> Router
where
    S: SupplierRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All suppliers", body = Vec<Supplier>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_suppliers<S: SupplierRepository, P: ProductRepository>(
    State(service): State<Arc<SupplierService<S, P>>>,
) -> InventoryResult<Json<Vec<Supplier>>> {
    Ok(Json(service.list_suppliers().await?))
}

/// Register a supplier
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = SupplierRequest,
    responses(
        (status = 201, description = "Supplier created", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_supplier<S: SupplierRepository, P: ProductRepository>(
    State(service): State<Arc<SupplierService<S, P>>>,
    JsonBody(input): JsonBody<SupplierRequest>,
) -> InventoryResult<(StatusCode, Json<Supplier>)> {
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Supplier id")),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_supplier<S: SupplierRepository, P: ProductRepository>(
    State(service): State<Arc<SupplierService<S, P>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Supplier>> {
    Ok(Json(service.get_supplier(id).await?))
}

/// Overwrite every field of a supplier
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Supplier id")),
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_supplier<S: SupplierRepository, P: ProductRepository>(
    State(service): State<Arc<SupplierService<S, P>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<SupplierRequest>,
) -> InventoryResult<Json<Supplier>> {
    Ok(Json(service.update_supplier(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Supplier id")),
    responses(
        (status = 204, description = "Supplier deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_supplier<S: SupplierRepository, P: ProductRepository>(
    State(service): State<Arc<SupplierService<S, P>>>,
    IdPath(id): IdPath,
) -> InventoryResult<StatusCode> {
    service.delete_supplier(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
