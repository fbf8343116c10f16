use super::*;

/// Tests cancelling an active booking.
///
/// Expected: Ok(true) and stored status `cancelled`
#[tokio::test]
async fn cancels_active_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _property, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel_if_active(booking.id).await?;

    assert!(cancelled);
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "cancelled");

    Ok(())
}

/// Tests that a completed booking is left untouched.
///
/// Expected: Ok(false) and stored status still `completed`
#[tokio::test]
async fn leaves_completed_booking_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, property.id, user.id)
        .status("completed")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel_if_active(booking.id).await?;

    assert!(!cancelled);
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "completed");

    Ok(())
}
