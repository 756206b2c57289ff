//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "connection refused",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid field or unresolvable reference",
    content_type = "application/json",
    example = json!({
        "error": "Category 42 does not exist",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Product 7 not found",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - duplicate value or resource still referenced",
    content_type = "application/json",
    example = json!({
        "error": "Supplier with tax id '12.345' already exists",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
