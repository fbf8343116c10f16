use super::*;

/// Tests submitting valid feedback.
///
/// Expected: Ok and listed for the property
#[tokio::test]
async fn stores_valid_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::property::create_property(db).await?;

    let service = FeedbackService::new(db);
    let feedback = service
        .create(CreateFeedbackParams {
            property_id: property.id,
            comment: "Muy limpio".to_string(),
            rating: 4,
        })
        .await?;

    let listed = service.get_by_property(property.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, feedback.id);

    Ok(())
}

/// Tests ratings outside 1..=5.
///
/// Expected: Err(BadRequest) for 0 and 6
#[tokio::test]
async fn rejects_rating_out_of_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::property::create_property(db).await?;
    let service = FeedbackService::new(db);

    for rating in [0, 6] {
        let result = service
            .create(CreateFeedbackParams {
                property_id: property.id,
                comment: "Ok".to_string(),
                rating,
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests an empty comment.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let property = factory::property::create_property(db).await?;

    let service = FeedbackService::new(db);
    let result = service
        .create(CreateFeedbackParams {
            property_id: property.id,
            comment: String::new(),
            rating: 5,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests feedback for an unknown property.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(db);
    let result = service
        .create(CreateFeedbackParams {
            property_id: 999999,
            comment: "Great".to_string(),
            rating: 5,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
