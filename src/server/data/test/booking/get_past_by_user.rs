use super::*;

/// Tests listing a user's past reservations.
///
/// Verifies bookings that ended before today are returned whatever their
/// status, most recent first.
///
/// Expected: Ok with two reservations
#[tokio::test]
async fn lists_ended_bookings_of_any_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = date(2099, 6, 15);
    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let older = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 5, 1))
        .check_out(date(2099, 5, 3))
        .status("completed")
        .build()
        .await?;
    let recent = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 6, 10))
        .check_out(date(2099, 6, 14))
        .status("cancelled")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 6, 14))
        .check_out(today)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let past = repo.get_past_by_user(user.id, today).await?;

    let ids: Vec<i32> = past.iter().map(|r| r.booking.id).collect();
    assert_eq!(ids, vec![recent.id, older.id]);
    assert_eq!(past[0].booking.status, BookingStatus::Cancelled);
    assert_eq!(past[1].booking.status, BookingStatus::Completed);

    Ok(())
}
