use super::*;

/// Tests batch lookup with a mix of known and unknown links.
///
/// Expected: only the known links, excluded ones included
#[tokio::test]
async fn returns_known_links_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "a", 1).await?;
    factory::create_song_with_views(db, "b", 1).await?;
    factory::mark_not_downloaded(db, "b").await?;

    let repo = SongRepository::new(db);
    let mut songs: Vec<String> = repo
        .find_by_vlinks(&["b".to_string(), "missing".to_string(), "a".to_string()])
        .await?
        .into_iter()
        .map(|song| song.vlink)
        .collect();
    songs.sort();

    assert_eq!(songs, vec!["a", "b"]);

    Ok(())
}

#[tokio::test]
async fn empty_input_returns_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song(db).await?;

    let repo = SongRepository::new(db);

    assert!(repo.find_by_vlinks(&[]).await?.is_empty());

    Ok(())
}
