use super::*;

/// Tests rebookmarking a song at a later time.
///
/// Expected: exactly one entry holding the later time
#[tokio::test]
async fn later_bookmark_replaces_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "a", 1).await?;

    let ledger = BookmarkLedgerService::new(db);
    ledger.bookmark(1, "a", at_second(100)).await?;
    ledger.bookmark(1, "a", at_second(200)).await?;

    let entries = ledger.list_for_user(1).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].bookmarked_at, at_second(200));

    Ok(())
}

/// Tests bookmarking a link with no catalog entry.
///
/// Expected: Err(InvalidReference), nothing stored
#[tokio::test]
async fn rejects_unknown_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ledger = BookmarkLedgerService::new(db);
    let result = ledger
        .bookmark(1, "nonexistent-vlink", at_second(1))
        .await;

    assert!(
        matches!(result, Err(AppError::InvalidReference(ref vlink)) if vlink == "nonexistent-vlink")
    );
    assert!(ledger.list_for_user(1).await?.is_empty());

    Ok(())
}

/// Tests bookmarking a song whose link is excluded.
///
/// Expected: Ok, only existence is checked
#[tokio::test]
async fn accepts_excluded_song() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "a", 1).await?;
    factory::mark_dead(db, "a", None).await?;

    let ledger = BookmarkLedgerService::new(db);
    let entry = ledger.bookmark(1, "a", at_second(1)).await?;

    assert_eq!(entry.vlink, "a");

    Ok(())
}

/// Tests removing bookmarks, including one that does not exist.
#[tokio::test]
async fn unbookmark_is_noop_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "a", 1).await?;

    let ledger = BookmarkLedgerService::new(db);
    ledger.bookmark(1, "a", at_second(1)).await?;

    ledger.unbookmark(1, "a").await?;
    ledger.unbookmark(1, "a").await?;
    ledger.unbookmark(2, "never").await?;

    assert!(ledger.list_for_user(1).await?.is_empty());

    Ok(())
}
