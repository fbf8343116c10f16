//! Property domain model.
//!
//! Properties are reference data: they are seeded by migration and only read by
//! the application.

use chrono::{DateTime, Utc};

use crate::model::property::PropertyDto;

/// A rentable property listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    /// Nightly price; missing for listings without a published rate.
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Converts an entity model to a property domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Property` - The converted property
    pub fn from_entity(entity: entity::property::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            price: entity.price,
            description: entity.description,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PropertyDto {
        PropertyDto {
            id: self.id,
            name: self.name,
            location: self.location,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}
