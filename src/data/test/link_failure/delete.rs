use super::*;

/// Tests removing a link present in both tables.
///
/// Expected: both rows removed, count 2
#[tokio::test]
async fn removes_link_from_both_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mark_not_downloaded(db, "a").await?;
    factory::mark_dead(db, "a", None).await?;
    factory::mark_dead(db, "b", None).await?;

    let repo = LinkFailureRepository::new(db);
    let removed = repo.delete("a").await?;

    assert_eq!(removed, 2);
    assert!(repo.get_failures("a").await?.is_empty());
    assert!(repo.get_dead("b").await?.is_some());

    Ok(())
}

/// Tests removing a link with no record.
///
/// Expected: Ok with nothing removed
#[tokio::test]
async fn absent_link_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LinkFailureRepository::new(db);

    assert_eq!(repo.delete("missing").await?, 0);

    Ok(())
}
