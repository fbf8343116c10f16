use super::*;

/// Tests loading active ranges for a property.
///
/// Verifies only active bookings are returned, ordered by check-in.
///
/// Expected: Ok with two ranges
#[tokio::test]
async fn returns_active_ranges_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 3, 1))
        .check_out(date(2099, 3, 2))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 1, 10))
        .check_out(date(2099, 1, 12))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 2, 1))
        .check_out(date(2099, 2, 3))
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let ranges = repo.get_active_ranges_by_property(property.id).await?;

    assert_eq!(
        ranges,
        vec![
            stay(date(2099, 1, 10), date(2099, 1, 12)),
            stay(date(2099, 3, 1), date(2099, 3, 2)),
        ]
    );

    Ok(())
}

/// Tests a property without bookings.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_for_unbooked_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::property::create_property(db).await?;

    let repo = BookingRepository::new(db);
    let ranges = repo.get_active_ranges_by_property(property.id).await?;

    assert!(ranges.is_empty());

    Ok(())
}
