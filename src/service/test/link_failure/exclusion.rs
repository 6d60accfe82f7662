use super::*;

/// Tests that either failure class excludes a link until cleared.
///
/// Expected: excluded after recording, not excluded after clear
#[tokio::test]
async fn recorded_links_stay_excluded_until_cleared() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LinkFailureService::new(db);
    service.record_not_downloaded("pending").await?;
    service
        .record_dead("gone", Some("account terminated".to_string()))
        .await?;

    assert!(service.is_excluded("pending").await?);
    assert!(service.is_excluded("gone").await?);
    assert!(!service.is_excluded("healthy").await?);

    service.clear("pending").await?;
    service.clear("gone").await?;

    assert!(!service.is_excluded("pending").await?);
    assert!(!service.is_excluded("gone").await?);

    Ok(())
}

/// Tests that clearing a link with no record changes nothing.
#[tokio::test]
async fn clearing_unknown_link_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mark_dead(db, "other", None).await?;

    let service = LinkFailureService::new(db);
    service.clear("unknown").await?;

    let excluded = service.list_excluded().await?;
    assert_eq!(excluded.len(), 1);
    assert!(excluded.contains("other"));

    Ok(())
}

/// Tests the excluded snapshot across both classes.
#[tokio::test]
async fn lists_union_of_failure_classes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LinkFailureService::new(db);
    service.record_not_downloaded("a").await?;
    service.record_not_downloaded("a").await?;
    service.record_dead("a", None).await?;
    service.record_dead("b", None).await?;

    let excluded = service.list_excluded().await?;

    assert_eq!(excluded.len(), 2);
    assert!(excluded.contains("a") && excluded.contains("b"));

    let counts = service.counts().await?;
    assert_eq!((counts.not_downloaded, counts.dead), (1, 2));

    Ok(())
}

/// Tests replacing the not-downloaded set after an ingestion pass.
#[tokio::test]
async fn replaces_not_downloaded_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LinkFailureService::new(db);
    service.record_not_downloaded("fixed").await?;

    let count = service
        .replace_not_downloaded(vec!["still_missing".to_string()])
        .await?;

    assert_eq!(count, 1);
    assert!(!service.is_excluded("fixed").await?);
    assert!(service.is_excluded("still_missing").await?);

    Ok(())
}
