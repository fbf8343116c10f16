//! Feedback service for submitting and listing property reviews.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{feedback::FeedbackRepository, property::PropertyRepository},
    error::AppError,
    model::feedback::{CreateFeedbackParams, Feedback, MAX_RATING, MIN_RATING},
};

/// Service providing business logic for property feedback.
pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    /// Creates a new FeedbackService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FeedbackService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores feedback for a property.
    ///
    /// # Arguments
    /// - `params` - Property id, comment and rating
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The stored feedback
    /// - `Err(AppError::BadRequest)` - Empty comment or rating outside 1..=5
    /// - `Err(AppError::NotFound)` - Property does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&params.rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        if params.comment.is_empty() {
            return Err(AppError::BadRequest("Comment must not be empty".to_string()));
        }

        let property_repo = PropertyRepository::new(self.db);
        if property_repo.find_by_id(params.property_id).await?.is_none() {
            return Err(AppError::NotFound("Property not found".to_string()));
        }

        let feedback_repo = FeedbackRepository::new(self.db);
        let feedback = feedback_repo.create(params).await?;

        tracing::debug!(
            "Stored feedback {} for property {}",
            feedback.id,
            feedback.property_id
        );

        Ok(feedback)
    }

    /// Gets the feedback for a property, newest first.
    ///
    /// # Arguments
    /// - `property_id` - Property to list feedback for
    ///
    /// # Returns
    /// - `Ok(Vec<Feedback>)` - Feedback entries, empty for unknown properties
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_property(&self, property_id: i32) -> Result<Vec<Feedback>, AppError> {
        let repo = FeedbackRepository::new(self.db);
        Ok(repo.get_by_property(property_id).await?)
    }
}
