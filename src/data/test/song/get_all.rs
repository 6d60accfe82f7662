use super::*;

/// Tests that the full catalog ignores link failures.
///
/// Expected: every song, ordered by link
#[tokio::test]
async fn returns_excluded_songs_ordered_by_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "c", 10).await?;
    factory::create_song_with_views(db, "a", 30).await?;
    factory::create_song_with_views(db, "b", 20).await?;
    factory::mark_not_downloaded(db, "a").await?;
    factory::mark_dead(db, "b", None).await?;

    let repo = SongRepository::new(db);
    let songs = repo.get_all().await?;

    let vlinks: Vec<&str> = songs.iter().map(|song| song.vlink.as_str()).collect();
    assert_eq!(vlinks, vec!["a", "b", "c"]);

    Ok(())
}

/// Tests counting the catalog against availability.
///
/// Expected: `count` includes excluded songs, `count_available` does not
#[tokio::test]
async fn counts_all_and_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "a", 1).await?;
    factory::create_song_with_views(db, "b", 1).await?;
    factory::create_song_with_views(db, "c", 1).await?;
    factory::mark_dead(db, "c", None).await?;

    let repo = SongRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.count_available().await?, 2);

    Ok(())
}

#[tokio::test]
async fn returns_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SongRepository::new(db);

    assert!(repo.get_all().await?.is_empty());
    assert_eq!(repo.count_available().await?, 0);

    Ok(())
}
