//! Property fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::property;

/// Default test property name.
pub const DEFAULT_NAME: &str = "Loft en Bogotá";

/// Creates a property entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Loft en Bogotá"`
/// - location: `Some("Av Suba #125-98, Bogotá")`
/// - price: `Some(320000.0)`
/// - description, image_url: `None`
pub fn entity() -> property::Model {
    property::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        location: Some("Av Suba #125-98, Bogotá".to_string()),
        price: Some(320000.0),
        description: None,
        image_url: None,
        created_at: Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap(),
    }
}
