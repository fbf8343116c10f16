use super::*;

/// Tests reading a booking row whose status is not a known lifecycle state.
///
/// Verifies that the conversion failure is reported as `Corrupt` rather than
/// being folded into a generic storage error.
///
/// Expected: Err(BookingError::Corrupt) from both lookup and listing
#[tokio::test]
async fn reports_corrupt_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, property) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, property.id, user.id)
        .check_in(date(2099, 1, 10))
        .check_out(date(2099, 1, 12))
        .status("pending")
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let found = repo.find_by_id_and_user(booking.id, user.id).await;
    assert!(matches!(found, Err(BookingError::Corrupt(_))));

    let past = repo.get_past_by_user(user.id, date(2099, 2, 1)).await;
    assert!(matches!(past, Err(BookingError::Corrupt(_))));

    Ok(())
}
