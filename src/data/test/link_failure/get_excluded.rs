use super::*;

/// Tests the excluded set as the union of both tables.
///
/// Expected: each link once, counts per table
#[tokio::test]
async fn unions_both_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::mark_not_downloaded(db, "a").await?;
    factory::mark_not_downloaded(db, "b").await?;
    factory::mark_dead(db, "b", None).await?;
    factory::mark_dead(db, "c", None).await?;

    let repo = LinkFailureRepository::new(db);
    let excluded = repo.get_excluded().await?;

    assert_eq!(excluded.len(), 3);
    assert!(["a", "b", "c"].iter().all(|vlink| excluded.contains(*vlink)));

    let counts = repo.count().await?;
    assert_eq!(counts.not_downloaded, 2);
    assert_eq!(counts.dead, 2);

    Ok(())
}
