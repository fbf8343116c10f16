use super::*;

/// Tests creating feedback for a property.
///
/// Expected: Ok with stored comment and rating
#[tokio::test]
async fn creates_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::property::create_property(db).await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .create(CreateFeedbackParams {
            property_id: property.id,
            comment: "Excelente ubicación".to_string(),
            rating: 5,
        })
        .await?;

    assert_eq!(feedback.property_id, property.id);
    assert_eq!(feedback.comment, "Excelente ubicación");
    assert_eq!(feedback.rating, 5);

    Ok(())
}

/// Tests feedback for a property that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_property() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let result = repo
        .create(CreateFeedbackParams {
            property_id: 999999,
            comment: "Nice".to_string(),
            rating: 4,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
