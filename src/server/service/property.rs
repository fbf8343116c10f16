//! Property service for listing and looking up properties.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::property::PropertyRepository, error::AppError, model::property::Property,
};

/// Service providing read access to property listings.
pub struct PropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyService<'a> {
    /// Creates a new PropertyService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PropertyService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all properties.
    ///
    /// # Returns
    /// - `Ok(Vec<Property>)` - Every property ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Property>, AppError> {
        let repo = PropertyRepository::new(self.db);
        Ok(repo.get_all().await?)
    }

    /// Gets a property by id.
    ///
    /// # Arguments
    /// - `id` - Property id
    ///
    /// # Returns
    /// - `Ok(Property)` - Property found
    /// - `Err(AppError::NotFound)` - No property with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Property, AppError> {
        let repo = PropertyRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))
    }
}
