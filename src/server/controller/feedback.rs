use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        feedback::{CreateFeedbackDto, FeedbackDto, FeedbackListDto},
    },
    server::{
        error::AppError, model::feedback::CreateFeedbackParams, service::feedback::FeedbackService,
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

/// Submit feedback for a property.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Property id, comment and a 1 to 5 rating
///
/// # Returns
/// - `201 Created` - Feedback stored
/// - `400 Bad Request` - Empty comment or rating out of range
/// - `404 Not Found` - Property does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackDto),
        (status = 400, description = "Invalid feedback", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let feedback = service
        .create(CreateFeedbackParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

/// List feedback for a property, newest first.
///
/// # Returns
/// - `200 OK` - Feedback entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/feedback/{property_id}",
    tag = FEEDBACK_TAG,
    params(
        ("property_id" = i32, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Feedback for the property", body = FeedbackListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(&state.db);

    let feedback = service.get_by_property(property_id).await?;

    Ok((
        StatusCode::OK,
        Json(FeedbackListDto {
            feedback: feedback.into_iter().map(|f| f.into_dto()).collect(),
        }),
    ))
}
