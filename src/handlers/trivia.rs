// src/handlers/trivia.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use rand::seq::SliceRandom;

use crate::{
    catalog,
    error::AppError,
    models::trivia::{AlbumDetail, SongMeaning, TriviaFact},
    storage::KeyValueStore,
};

/// Calendar-day marker for the current daily fact. Process-wide: the whole
/// site shares one fact per day.
const TRIVIA_DATE_KEY: &str = "taylor_swift_trivia_date";
const TODAY_FACT_KEY: &str = "taylor_swift_today_fact";

fn draw_fact() -> Result<TriviaFact, AppError> {
    catalog::trivia_facts()
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::InternalServerError("Trivia pool is empty".to_string()))
}

/// Draws a fresh fact and caches it as today's fact.
pub async fn draw_and_cache_fact(store: &dyn KeyValueStore) -> Result<TriviaFact, AppError> {
    let fact = draw_fact()?;
    store.set(TODAY_FACT_KEY, &serde_json::to_string(&fact)?).await?;
    Ok(fact)
}

/// Returns the fact for `today`.
///
/// Same-day calls return the cached fact; the first call of a new calendar
/// day advances the marker and draws fresh. An unreadable cached fact is
/// replaced by a fresh draw.
pub async fn daily_fact_for(
    store: &dyn KeyValueStore,
    today: NaiveDate,
) -> Result<TriviaFact, AppError> {
    let marker = today.format("%Y-%m-%d").to_string();
    let last = store.get(TRIVIA_DATE_KEY).await?;

    if last.as_deref() != Some(marker.as_str()) {
        store.set(TRIVIA_DATE_KEY, &marker).await?;
        return draw_and_cache_fact(store).await;
    }

    match store.get(TODAY_FACT_KEY).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(fact) => Ok(fact),
            Err(e) => {
                tracing::warn!("Discarding unreadable cached trivia fact: {}", e);
                draw_and_cache_fact(store).await
            }
        },
        None => draw_and_cache_fact(store).await,
    }
}

/// Returns today's trivia fact.
pub async fn get_daily_fact(
    State(store): State<Arc<dyn KeyValueStore>>,
) -> Result<impl IntoResponse, AppError> {
    let fact = daily_fact_for(store.as_ref(), Utc::now().date_naive()).await?;

    Ok(Json(fact))
}

/// Returns a random trivia fact, bypassing the daily cache.
pub async fn get_random_fact(
    State(store): State<Arc<dyn KeyValueStore>>,
) -> Result<impl IntoResponse, AppError> {
    let fact = draw_and_cache_fact(store.as_ref()).await?;

    Ok(Json(fact))
}

/// Lists the album catalog.
pub async fn list_albums() -> impl IntoResponse {
    Json(catalog::albums())
}

/// Returns one album with its sample track list.
/// Lookup is a case-insensitive substring match on the album name.
pub async fn get_album(Path(name): Path<String>) -> Result<impl IntoResponse, AppError> {
    let album = catalog::album_by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("No album matches '{}'", name)))?;
    let sample_tracks = catalog::songs_by_album(&album.name);

    Ok(Json(AlbumDetail {
        album,
        sample_tracks,
    }))
}

/// Lists all song meanings.
pub async fn list_song_meanings() -> impl IntoResponse {
    Json(catalog::song_meanings())
}

/// Returns a random song meaning.
pub async fn get_random_song() -> Result<impl IntoResponse, AppError> {
    let meaning: SongMeaning = catalog::song_meanings()
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::InternalServerError("Song pool is empty".to_string()))?;

    Ok(Json(meaning))
}

/// Lists upcoming fan-calendar events.
pub async fn list_events() -> impl IntoResponse {
    Json(catalog::upcoming_events(Utc::now().date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn same_day_calls_return_the_cached_fact() {
        let store = MemoryStore::new();
        let today = day(2025, 6, 1);

        let first = daily_fact_for(&store, today).await.unwrap();
        let second = daily_fact_for(&store, today).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            store.get(TRIVIA_DATE_KEY).await.unwrap(),
            Some("2025-06-01".to_string())
        );
    }

    #[tokio::test]
    async fn a_new_day_advances_the_marker_and_redraws() {
        let store = MemoryStore::new();

        daily_fact_for(&store, day(2025, 6, 1)).await.unwrap();
        let next = daily_fact_for(&store, day(2025, 6, 2)).await.unwrap();

        assert_eq!(
            store.get(TRIVIA_DATE_KEY).await.unwrap(),
            Some("2025-06-02".to_string())
        );

        // The redraw is cached for the remainder of the new day.
        let cached: TriviaFact =
            serde_json::from_str(&store.get(TODAY_FACT_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(cached, next);
    }

    #[tokio::test]
    async fn random_draw_refreshes_the_cache_but_not_the_marker() {
        let store = MemoryStore::new();
        let today = day(2025, 6, 1);

        daily_fact_for(&store, today).await.unwrap();
        let random = draw_and_cache_fact(&store).await.unwrap();

        // Same-day daily call now serves whatever the random draw cached.
        let daily = daily_fact_for(&store, today).await.unwrap();
        assert_eq!(daily, random);
        assert_eq!(
            store.get(TRIVIA_DATE_KEY).await.unwrap(),
            Some("2025-06-01".to_string())
        );
    }

    #[tokio::test]
    async fn unreadable_cached_fact_is_replaced() {
        let store = MemoryStore::new();
        let today = day(2025, 6, 1);

        daily_fact_for(&store, today).await.unwrap();
        store.set(TODAY_FACT_KEY, "<garbage>").await.unwrap();

        let fact = daily_fact_for(&store, today).await.unwrap();
        let cached: TriviaFact =
            serde_json::from_str(&store.get(TODAY_FACT_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(cached, fact);
    }
}
