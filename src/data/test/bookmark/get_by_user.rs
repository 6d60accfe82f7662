use super::*;

/// Tests listing a user's bookmarks.
///
/// Expected: newest first, equal times ordered by link, other users excluded
#[tokio::test]
async fn orders_newest_first_with_link_tie_break() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bookmark_at(db, 1, "old", at_minute(0)).await?;
    factory::create_bookmark_at(db, 1, "tie_b", at_minute(7)).await?;
    factory::create_bookmark_at(db, 1, "tie_a", at_minute(7)).await?;
    factory::create_bookmark_at(db, 1, "new", at_minute(20)).await?;
    factory::create_bookmark_at(db, 2, "other", at_minute(30)).await?;

    let repo = BookmarkRepository::new(db);
    let vlinks: Vec<String> = repo
        .get_by_user(1)
        .await?
        .into_iter()
        .map(|entry| entry.vlink)
        .collect();

    assert_eq!(vlinks, vec!["new", "tie_a", "tie_b", "old"]);

    Ok(())
}

#[tokio::test]
async fn user_without_bookmarks_gets_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bookmark_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookmarkRepository::new(db);

    assert!(repo.get_by_user(1).await?.is_empty());

    Ok(())
}
