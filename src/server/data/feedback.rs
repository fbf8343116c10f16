//! Feedback data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::feedback::{CreateFeedbackParams, Feedback};

/// Repository providing database operations for property feedback.
pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    /// Creates a new FeedbackRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FeedbackRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a feedback entry.
    ///
    /// # Arguments
    /// - `params` - Property id, comment and rating
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The created feedback
    /// - `Err(DbErr)` - Database error, including the rating check constraint
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, DbErr> {
        let entity = entity::feedback::ActiveModel {
            property_id: ActiveValue::Set(params.property_id),
            comment: ActiveValue::Set(params.comment),
            rating: ActiveValue::Set(params.rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    /// Gets all feedback for a property, newest first.
    ///
    /// # Arguments
    /// - `property_id` - Property to list feedback for
    ///
    /// # Returns
    /// - `Ok(Vec<Feedback>)` - Feedback entries ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_property(&self, property_id: i32) -> Result<Vec<Feedback>, DbErr> {
        let entities = entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::PropertyId.eq(property_id))
            .order_by_desc(entity::feedback::Column::CreatedAt)
            .order_by_desc(entity::feedback::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Feedback::from_entity).collect())
    }
}
