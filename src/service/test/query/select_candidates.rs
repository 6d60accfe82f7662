use super::*;

async fn seed_by_views(db: &sea_orm::DatabaseConnection, count: i64) -> Result<(), AppError> {
    for i in 0..count {
        factory::create_song_with_views(db, format!("v{:02}", i), 1_000 - i).await?;
    }

    Ok(())
}

/// Tests the limit window over the popularity order.
///
/// Expected: songs `[start, end)` of the most viewed first list
#[tokio::test]
async fn applies_limit_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_by_views(db, 10).await?;
    factory::mark_dead(db, "v00", None).await?;

    let service = SongQueryService::new(db);
    let candidates = service
        .select_candidates(&SessionCriteria {
            limit_start: 1,
            limit_end: Some(4),
            shuffle: ShuffleType::Popularity,
            ..Default::default()
        })
        .await?;

    let vlinks: Vec<&str> = candidates.songs.iter().map(|song| song.vlink()).collect();
    assert_eq!(vlinks, vec!["v02", "v03", "v04"]);
    assert_eq!(candidates.count_before_limit, 9);

    Ok(())
}

/// Tests hard weighting across popularity buckets.
///
/// Expected: least viewed songs carry the largest weight
#[tokio::test]
async fn weights_obscure_songs_for_hard_games() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_by_views(db, 5).await?;

    let service = SongQueryService::new(db);
    let candidates = service
        .select_candidates(&SessionCriteria {
            shuffle: ShuffleType::WeightedHard,
            ..Default::default()
        })
        .await?;

    let weights: Vec<(&str, u32)> = candidates
        .songs
        .iter()
        .map(|song| (song.vlink(), song.selection_weight))
        .collect();
    assert_eq!(
        weights,
        vec![("v00", 1), ("v01", 2), ("v02", 4), ("v03", 8), ("v04", 16)]
    );

    Ok(())
}

/// Tests that random shuffling keeps the same candidate set.
#[tokio::test]
async fn random_shuffle_keeps_candidate_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_by_views(db, 8).await?;

    let service = SongQueryService::new(db);
    let candidates = service
        .select_candidates(&SessionCriteria::default())
        .await?;

    let mut vlinks: Vec<&str> = candidates.songs.iter().map(|song| song.vlink()).collect();
    vlinks.sort();

    assert_eq!(vlinks.len(), 8);
    assert_eq!(vlinks.first(), Some(&"v00"));
    assert_eq!(vlinks.last(), Some(&"v07"));
    assert!(candidates.songs.iter().all(|song| song.selection_weight == 1));

    Ok(())
}

/// Tests a window starting past the end of the candidates.
///
/// Expected: no songs, count before limit still reported
#[tokio::test]
async fn window_past_end_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_by_views(db, 3).await?;

    let service = SongQueryService::new(db);
    let candidates = service
        .select_candidates(&SessionCriteria {
            limit_start: 5,
            shuffle: ShuffleType::WeightedEasy,
            ..Default::default()
        })
        .await?;

    assert!(candidates.songs.is_empty());
    assert_eq!(candidates.count_before_limit, 3);

    Ok(())
}
