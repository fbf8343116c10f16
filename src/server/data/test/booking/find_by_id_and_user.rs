use super::*;

/// Tests finding a booking owned by the user.
///
/// Expected: Ok(Some) with the booking
#[tokio::test]
async fn finds_owned_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _property, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id_and_user(booking.id, user.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, booking.id);

    Ok(())
}

/// Tests that another user's booking is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_booking_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _property, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id_and_user(booking.id, stranger.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests looking up a booking id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id_and_user(999999, user.id).await?;

    assert!(found.is_none());

    Ok(())
}
