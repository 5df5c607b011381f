//! Reusable OpenAPI responses describing the error envelope.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - a field failed validation",
    content_type = "application/json",
    example = json!({
        "status_code": 400,
        "message": "The field name is invalid!"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the body is not valid JSON for this resource",
    content_type = "application/json",
    example = json!({
        "status_code": 400,
        "message": "Invalid Json format"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status_code": 404,
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status_code": 500,
        "message": "An unexpected error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "status_code": 503,
        "message": "database unreachable"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
