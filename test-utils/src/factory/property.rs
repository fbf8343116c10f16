//! Property factory for creating test listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test properties with customizable fields.
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    image_url: Option<String>,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Property {id}"`
    /// - location: `Some("Test Location")`
    /// - price: `Some(100000.0)`
    /// - description, image_url: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Property {}", id),
            location: Some("Test Location".to_string()),
            price: Some(100000.0),
            description: None,
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Builds and inserts the property entity into the database.
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        entity::property::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values.
pub async fn create_property(db: &DatabaseConnection) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db).build().await
}
