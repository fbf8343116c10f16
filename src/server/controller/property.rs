use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        property::{PropertyDto, PropertyListDto},
    },
    server::{error::AppError, service::property::PropertyService, state::AppState},
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

/// List all properties.
///
/// # Returns
/// - `200 OK` - Every property listing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    responses(
        (status = 200, description = "All properties", body = PropertyListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_properties(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PropertyService::new(&state.db);

    let properties = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(PropertyListDto {
            properties: properties.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// Get one property's details.
///
/// # Returns
/// - `200 OK` - The property
/// - `404 Not Found` - No property with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property details", body = PropertyDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PropertyService::new(&state.db);

    let property = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(property.into_dto())))
}
