use super::*;

/// Tests splitting a user's bookings into upcoming and past.
///
/// Verifies a booking ending today is upcoming, a booking that ended
/// yesterday is past, and cancelled future bookings appear in neither.
///
/// Expected: one upcoming and one past reservation
#[tokio::test]
async fn splits_upcoming_and_past() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = date(2099, 6, 15);
    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let ends_today = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(today - Days::new(2))
        .check_out(today)
        .build()
        .await?;
    let ended = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(today - Days::new(5))
        .check_out(today - Days::new(1))
        .status("completed")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(today + Days::new(10))
        .check_out(today + Days::new(12))
        .status("cancelled")
        .build()
        .await?;

    let service = BookingService::new(db).with_today(today);

    let upcoming = service.upcoming_for_user(user.id).await?;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].booking.id, ends_today.id);
    assert_eq!(upcoming[0].property_name, property.name);

    let past = service.past_for_user(user.id).await?;
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].booking.id, ended.id);

    Ok(())
}

/// Tests listing reservations when a stored booking has an unknown status.
///
/// The past listing reads rows of any status, so the row reaches conversion.
/// Verifies that the failure maps to a 500 response instead of a rule violation.
///
/// Expected: Err(BookingError::Corrupt) mapped to 500
#[tokio::test]
async fn fails_on_corrupt_booking_row() -> Result<(), AppError> {
    use axum::{http::StatusCode, response::IntoResponse};

    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = date(2099, 6, 15);
    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 5, 1))
        .check_out(date(2099, 5, 3))
        .status("pending")
        .build()
        .await?;

    let service = BookingService::new(db).with_today(today);

    let past = service.past_for_user(user.id).await;
    let Err(err) = past else {
        panic!("expected past listing to fail");
    };
    assert!(matches!(err, BookingError::Corrupt(_)));
    assert_eq!(
        AppError::from(err).into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}
