use super::*;

/// Tests reserving a free range and then an overlapping one.
///
/// Verifies the first reservation is stored active and the second, which
/// shares two days with it, is rejected.
///
/// Expected: Ok then Err(Overlap)
#[tokio::test]
async fn rejects_overlapping_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db);

    let booking = service
        .reserve(reserve_params(property.id, user.id, "2099-01-10", "2099-01-12"))
        .await?;
    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.stay.check_in(), date(2099, 1, 10));
    assert_eq!(booking.stay.check_out(), date(2099, 1, 12));

    let result = service
        .reserve(reserve_params(property.id, user.id, "2099-01-11", "2099-01-13"))
        .await;
    assert!(matches!(result, Err(BookingError::Overlap)));

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests that a range starting on the previous booking's check-out day collides.
///
/// Expected: Err(Overlap)
#[tokio::test]
async fn rejects_touching_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db);

    service
        .reserve(reserve_params(property.id, user.id, "2099-01-10", "2099-01-12"))
        .await?;
    let result = service
        .reserve(reserve_params(property.id, user.id, "2099-01-12", "2099-01-14"))
        .await;

    assert!(matches!(result, Err(BookingError::Overlap)));

    Ok(())
}

/// Tests that a cancelled booking no longer blocks its days.
///
/// Expected: Ok for the same range after cancellation
#[tokio::test]
async fn cancelled_booking_does_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 1, 10))
        .check_out(date(2099, 1, 12))
        .status("cancelled")
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service
        .reserve(reserve_params(property.id, user.id, "2099-01-10", "2099-01-12"))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that the same range on a different property is accepted.
///
/// Expected: Ok
#[tokio::test]
async fn allows_same_range_on_other_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::property::create_property(db).await?;
    let service = BookingService::new(db);

    service
        .reserve(reserve_params(property.id, user.id, "2099-01-10", "2099-01-12"))
        .await?;
    let result = service
        .reserve(reserve_params(other.id, user.id, "2099-01-10", "2099-01-12"))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a check-in date before today.
///
/// Expected: Err(PastDate)
#[tokio::test]
async fn rejects_past_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db).with_today(date(2099, 6, 15));

    let result = service
        .reserve(reserve_params(property.id, user.id, "2099-06-14", "2099-06-20"))
        .await;

    assert!(matches!(result, Err(BookingError::PastDate)));

    Ok(())
}

/// Tests a stay that starts today.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_check_in_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db).with_today(date(2099, 6, 15));

    let result = service
        .reserve(reserve_params(property.id, user.id, "2099-06-15", "2099-06-15"))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a day-first date string.
///
/// Expected: Err(InvalidDateFormat) naming the bad value
#[tokio::test]
async fn rejects_malformed_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db);

    let result = service
        .reserve(reserve_params(property.id, user.id, "10-01-2099", "2099-01-12"))
        .await;

    assert!(matches!(
        result,
        Err(BookingError::InvalidDateFormat(value)) if value == "10-01-2099"
    ));

    Ok(())
}

/// Tests a check-out before check-in.
///
/// Expected: Err(InvalidRange)
#[tokio::test]
async fn rejects_inverted_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db);

    let result = service
        .reserve(reserve_params(property.id, user.id, "2099-01-12", "2099-01-10"))
        .await;

    assert!(matches!(result, Err(BookingError::InvalidRange)));

    Ok(())
}

/// Tests the maximum stay length.
///
/// Verifies a stay of exactly `MAX_STAY_DAYS` days is accepted and that longer
/// stays, including one running to the end of the calendar, are refused.
///
/// Expected: Ok, then Err(StayTooLong) twice
#[tokio::test]
async fn limits_stay_length() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let (_, other) = factory::helpers::create_booking_dependencies(db).await?;
    let service = BookingService::new(db).with_today(date(2098, 12, 1));

    let booking = service
        .reserve(reserve_params(property.id, user.id, "2099-01-01", "2099-12-31"))
        .await?;
    assert_eq!(booking.stay.len_days(), MAX_STAY_DAYS);

    let result = service
        .reserve(reserve_params(other.id, user.id, "2099-01-01", "2100-01-01"))
        .await;
    assert!(matches!(result, Err(BookingError::StayTooLong(MAX_STAY_DAYS))));

    let result = service
        .reserve(reserve_params(other.id, user.id, "2099-01-01", "9999-12-31"))
        .await;
    assert!(matches!(result, Err(BookingError::StayTooLong(_))));

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests two reservations for the same days submitted concurrently.
///
/// Verifies exactly one is stored and the other is refused.
///
/// Expected: one Ok and one Err
#[tokio::test]
async fn concurrent_reservations_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let first = BookingService::new(db);
    let second = BookingService::new(db);

    let (a, b) = tokio::join!(
        first.reserve(reserve_params(property.id, user.id, "2099-03-01", "2099-03-05")),
        second.reserve(reserve_params(property.id, user.id, "2099-03-04", "2099-03-08")),
    );

    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}
