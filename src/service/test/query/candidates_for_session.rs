use super::*;
use serde_json::json;

/// Tests wrapping available songs as neutral candidates.
///
/// Expected: available songs in popularity order, weight 1
#[tokio::test]
async fn wraps_available_songs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_song_with_views(db, "a", 10).await?;
    factory::create_song_with_views(db, "b", 30).await?;
    factory::create_song_with_views(db, "c", 20).await?;
    factory::mark_not_downloaded(db, "c").await?;

    let service = SongQueryService::new(db);
    let candidates = service
        .candidates_for_session(&SongFilter::default())
        .await?;

    let vlinks: Vec<&str> = candidates.iter().map(|song| song.vlink()).collect();
    assert_eq!(vlinks, vec!["b", "a"]);
    assert!(candidates.iter().all(|song| song.selection_weight == 1));

    Ok(())
}

/// Tests reading the filter from a guild's stored game options.
#[tokio::test]
async fn uses_guild_game_options() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::song::SongFactory::new(db)
        .link("a")
        .artist_id(1)
        .build()
        .await?;
    factory::song::SongFactory::new(db)
        .link("b")
        .artist_id(2)
        .build()
        .await?;

    let service = SongQueryService::new(db);
    let candidates = service
        .candidates_for_guild(&json!({ "gameOptions": { "excludeArtistIds": [1] } }))
        .await?;

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].vlink(), "b");

    Ok(())
}

/// Tests a guild preference with malformed game options.
///
/// Expected: Err(PreferenceErr)
#[tokio::test]
async fn rejects_malformed_guild_options() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SongQueryService::new(db);
    let result = service
        .candidates_for_guild(&json!({ "gameOptions": { "minViews": "lots" } }))
        .await;

    assert!(matches!(result, Err(AppError::PreferenceErr(_))));

    Ok(())
}
