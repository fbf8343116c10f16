//! Feedback factory for creating test reviews.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test feedback with customizable fields.
pub struct FeedbackFactory<'a> {
    db: &'a DatabaseConnection,
    property_id: i32,
    comment: String,
    rating: i32,
}

impl<'a> FeedbackFactory<'a> {
    /// Creates a new FeedbackFactory with default values.
    ///
    /// Defaults:
    /// - comment: `"Great stay"`
    /// - rating: `5`
    pub fn new(db: &'a DatabaseConnection, property_id: i32) -> Self {
        Self {
            db,
            property_id,
            comment: "Great stay".to_string(),
            rating: 5,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Builds and inserts the feedback entity into the database.
    pub async fn build(self) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            property_id: ActiveValue::Set(self.property_id),
            comment: ActiveValue::Set(self.comment),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates feedback with default values for a property.
pub async fn create_feedback(
    db: &DatabaseConnection,
    property_id: i32,
) -> Result<entity::feedback::Model, DbErr> {
    FeedbackFactory::new(db, property_id).build().await
}
