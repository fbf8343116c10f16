use super::*;

/// Tests listing a user's upcoming reservations.
///
/// Verifies that ongoing and future active bookings are returned with the
/// property name, soonest first, and that past or cancelled ones are not.
///
/// Expected: Ok with two reservations
#[tokio::test]
async fn lists_active_bookings_not_yet_ended() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = date(2099, 6, 15);
    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let later = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 7, 1))
        .check_out(date(2099, 7, 3))
        .build()
        .await?;
    let ongoing = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 6, 14))
        .check_out(today)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 6, 1))
        .check_out(date(2099, 6, 3))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 8, 1))
        .check_out(date(2099, 8, 3))
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let upcoming = repo.get_upcoming_by_user(user.id, today).await?;

    let ids: Vec<i32> = upcoming.iter().map(|r| r.booking.id).collect();
    assert_eq!(ids, vec![ongoing.id, later.id]);
    assert!(upcoming.iter().all(|r| r.property_name == property.name));

    Ok(())
}

/// Tests that another user's bookings are excluded.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn excludes_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let upcoming = repo
        .get_upcoming_by_user(stranger.id, Utc::now().date_naive())
        .await?;

    assert!(upcoming.is_empty());

    Ok(())
}
