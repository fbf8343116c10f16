//! Property data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::property::Property;

/// Repository providing read access to property listings.
pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    /// Creates a new PropertyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PropertyRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all properties ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Property>)` - Every property listing
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Property>, DbErr> {
        let entities = entity::prelude::Property::find()
            .order_by_asc(entity::property::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Property::from_entity).collect())
    }

    /// Finds a property by id.
    ///
    /// # Arguments
    /// - `id` - Property id
    ///
    /// # Returns
    /// - `Ok(Some(Property))` - Property found
    /// - `Ok(None)` - No property with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Property>, DbErr> {
        let entity = entity::prelude::Property::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Property::from_entity))
    }
}
