//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities
//! together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a property, the two rows every booking references.
///
/// # Returns
/// - `Ok((user, property))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::property::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let property = crate::factory::property::create_property(db).await?;

    Ok((user, property))
}

/// Creates a user, a property and an active booking between them.
///
/// The booking uses the `BookingFactory` defaults (a stay starting next week).
///
/// # Returns
/// - `Ok((user, property, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::property::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (user, property) = create_booking_dependencies(db).await?;
    let booking = crate::factory::booking::create_booking(db, property.id, user.id).await?;

    Ok((user, property, booking))
}
