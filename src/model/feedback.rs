use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFeedbackDto {
    #[serde(alias = "id_property")]
    pub property_id: i32,
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: i32,
    pub property_id: i32,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackListDto {
    pub feedback: Vec<FeedbackDto>,
}
