//! Feedback domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::feedback::{CreateFeedbackDto, FeedbackDto};

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// A guest review left on a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i32,
    pub property_id: i32,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            comment: entity.comment,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            property_id: self.property_id,
            comment: self.comment,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

/// Parameters for submitting feedback on a property.
///
/// The comment is trimmed on conversion from the request body.
#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub property_id: i32,
    pub comment: String,
    pub rating: i32,
}

impl CreateFeedbackParams {
    pub fn from_dto(dto: CreateFeedbackDto) -> Self {
        Self {
            property_id: dto.property_id,
            comment: dto.comment.trim().to_string(),
            rating: dto.rating,
        }
    }
}
