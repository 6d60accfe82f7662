use super::*;

/// Tests moving a link from not-downloaded to dead.
///
/// Expected: not-downloaded row gone, dead row with reason present
#[tokio::test]
async fn moves_link_between_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mark_not_downloaded(db, "a").await?;

    let repo = LinkFailureRepository::new(db);
    let dead = repo
        .promote_to_dead("a", Some("download failed 5 times".to_string()))
        .await?;

    assert_eq!(dead.reason.as_deref(), Some("download failed 5 times"));
    assert!(!repo.is_not_downloaded("a").await?);
    assert_eq!(
        repo.get_failures("a").await?,
        vec![LinkFailure::Dead(dead)]
    );

    Ok(())
}

/// Tests promoting a link that was never recorded as not downloaded.
///
/// Expected: dead row created
#[tokio::test]
async fn promotes_unrecorded_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkFailureRepository::new(db);
    repo.promote_to_dead("a", None).await?;

    let counts = repo.count().await?;
    assert_eq!(counts.not_downloaded, 0);
    assert_eq!(counts.dead, 1);

    Ok(())
}
