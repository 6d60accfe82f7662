use super::*;

/// Tests that recording the same dead link twice matches recording it once.
///
/// Expected: one record with the same reason and creation time
#[tokio::test]
async fn repeated_record_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LinkFailureService::new(db);
    let first = service
        .record_dead("a", Some("copyright".to_string()))
        .await?;
    let second = service
        .record_dead("a", Some("copyright".to_string()))
        .await?;

    assert_eq!(first, second);
    assert_eq!(service.list_dead().await?, vec![first]);

    Ok(())
}

/// Tests that the latest reason wins.
#[tokio::test]
async fn last_reason_wins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LinkFailureService::new(db);
    service
        .record_dead("a", Some("region locked".to_string()))
        .await?;
    service.record_dead("a", Some("deleted".to_string())).await?;

    let dead = service.list_dead().await?;

    assert_eq!(dead.len(), 1);
    assert_eq!(dead[0].reason.as_deref(), Some("deleted"));

    Ok(())
}

/// Tests that declaring a link dead leaves its not-downloaded record alone.
///
/// Expected: both failure records held for the link
#[tokio::test]
async fn keeps_not_downloaded_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LinkFailureService::new(db);
    service.record_not_downloaded("a").await?;
    service.record_dead("a", None).await?;

    assert_eq!(service.failures_for("a").await?.len(), 2);

    Ok(())
}
