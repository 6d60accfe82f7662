use super::*;

/// Tests listing failures of a link recorded in both classes.
///
/// Expected: not-downloaded first, then dead
#[tokio::test]
async fn lists_both_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mark_not_downloaded(db, "a").await?;
    factory::mark_dead(db, "a", Some("blocked")).await?;

    let repo = LinkFailureRepository::new(db);
    let failures = repo.get_failures("a").await?;

    assert_eq!(failures.len(), 2);
    assert!(matches!(&failures[0], LinkFailure::NotDownloaded { vlink } if vlink == "a"));
    assert!(matches!(&failures[1], LinkFailure::Dead(dead) if dead.reason.as_deref() == Some("blocked")));

    Ok(())
}

#[tokio::test]
async fn healthy_link_has_no_failures() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkFailureRepository::new(db);

    assert!(repo.get_failures("a").await?.is_empty());

    Ok(())
}
