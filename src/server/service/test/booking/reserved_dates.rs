use super::*;

/// Tests expanding a property's active bookings into days.
///
/// Verifies both endpoints are included and cancelled bookings are skipped.
///
/// Expected: Ok with the three days of the active booking
#[tokio::test]
async fn expands_active_bookings() -> Result<(), AppError> {
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
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 2, 10))
        .check_out(date(2099, 2, 12))
        .status("cancelled")
        .build()
        .await?;

    let service = BookingService::new(db);
    let dates: Vec<NaiveDate> = service.reserved_dates(property.id).await?.into_iter().collect();

    assert_eq!(
        dates,
        vec![date(2099, 1, 10), date(2099, 1, 11), date(2099, 1, 12)]
    );

    Ok(())
}

/// Tests a property with no bookings.
///
/// Expected: Ok with empty set
#[tokio::test]
async fn empty_for_unbooked_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::property::create_property(db).await?;

    let service = BookingService::new(db);

    assert!(service.reserved_dates(property.id).await?.is_empty());

    Ok(())
}
