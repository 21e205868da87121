// src/handlers/history.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::HISTORY_CAP,
    error::AppError,
    models::{
        attempt::{Attempt, ProgressSnapshot, RecordAttemptRequest, score_percentage},
        progress::summarize,
    },
    storage::KeyValueStore,
    utils::player::PlayerId,
};

fn history_key(player: &PlayerId) -> String {
    format!("taylor_swift_quiz_history:{}", player.as_str())
}

fn progress_key(player: &PlayerId) -> String {
    format!("taylor_swift_quiz_progress:{}", player.as_str())
}

/// Loads a player's attempt list from its slot.
///
/// A missing or unreadable slot yields an empty list; the slot self-heals
/// on the next write.
pub async fn load_history(
    store: &dyn KeyValueStore,
    player: &PlayerId,
) -> Result<Vec<Attempt>, AppError> {
    let Some(raw) = store.get(&history_key(player)).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(attempts) => Ok(attempts),
        Err(e) => {
            tracing::warn!(
                "Discarding unreadable quiz history for player {}: {}",
                player.as_str(),
                e
            );
            Ok(Vec::new())
        }
    }
}

async fn save_history(
    store: &dyn KeyValueStore,
    player: &PlayerId,
    attempts: &[Attempt],
) -> Result<(), AppError> {
    let raw = serde_json::to_string(attempts)?;
    store.set(&history_key(player), &raw).await
}

async fn load_snapshot(
    store: &dyn KeyValueStore,
    player: &PlayerId,
) -> Result<ProgressSnapshot, AppError> {
    let Some(raw) = store.get(&progress_key(player)).await? else {
        return Ok(ProgressSnapshot::default());
    };

    match serde_json::from_str(&raw) {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            tracing::warn!(
                "Discarding unreadable progress snapshot for player {}: {}",
                player.as_str(),
                e
            );
            Ok(ProgressSnapshot::default())
        }
    }
}

/// Read-modify-write of the denormalized progress snapshot.
async fn update_snapshot(
    store: &dyn KeyValueStore,
    player: &PlayerId,
    attempt: &Attempt,
) -> Result<(), AppError> {
    let mut snapshot = load_snapshot(store, player).await?;

    snapshot.last_quiz_date = Some(attempt.timestamp);
    snapshot.total_quizzes += 1;
    snapshot.total_score += attempt.score as u64;
    snapshot.total_questions += attempt.total_questions as u64;

    if attempt.percentage > snapshot.best_score {
        snapshot.best_score = attempt.percentage;
        snapshot.best_score_date = Some(attempt.timestamp);
    }

    let raw = serde_json::to_string(&snapshot)?;
    store.set(&progress_key(player), &raw).await
}

/// Appends one attempt to a player's history.
///
/// Computes the percentage at write time, evicts the oldest entries past
/// the cap, persists the list, and refreshes the snapshot.
pub async fn record(
    store: &dyn KeyValueStore,
    player: &PlayerId,
    payload: RecordAttemptRequest,
) -> Result<Attempt, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if payload.score > payload.total_questions {
        return Err(AppError::BadRequest(
            "score cannot exceed total_questions".to_string(),
        ));
    }

    let now = Utc::now();
    let attempt = Attempt {
        id: now.timestamp_millis().to_string(),
        timestamp: now,
        score: payload.score,
        total_questions: payload.total_questions,
        percentage: score_percentage(payload.score, payload.total_questions),
        time_spent_ms: payload.time_spent_ms.unwrap_or(0),
        questions: payload.questions.unwrap_or_default(),
    };

    let mut attempts = load_history(store, player).await?;
    attempts.push(attempt.clone());

    if attempts.len() > HISTORY_CAP {
        let overflow = attempts.len() - HISTORY_CAP;
        attempts.drain(..overflow);
    }

    save_history(store, player, &attempts).await?;
    update_snapshot(store, player, &attempt).await?;

    Ok(attempt)
}

/// Deletes a player's history and progress snapshot. Idempotent.
pub async fn clear(store: &dyn KeyValueStore, player: &PlayerId) -> Result<(), AppError> {
    store.remove(&history_key(player)).await?;
    store.remove(&progress_key(player)).await?;
    Ok(())
}

/// Records a completed quiz attempt.
pub async fn record_attempt(
    State(store): State<Arc<dyn KeyValueStore>>,
    Extension(player): Extension<PlayerId>,
    Json(payload): Json<RecordAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    let attempt = record(store.as_ref(), &player, payload).await?;

    Ok((StatusCode::CREATED, Json(attempt)))
}

/// Returns a player's attempts in chronological order.
pub async fn list_history(
    State(store): State<Arc<dyn KeyValueStore>>,
    Extension(player): Extension<PlayerId>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = load_history(store.as_ref(), &player).await?;

    Ok(Json(attempts))
}

/// Returns the aggregate progress statistics for a player.
pub async fn get_progress(
    State(store): State<Arc<dyn KeyValueStore>>,
    Extension(player): Extension<PlayerId>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = load_history(store.as_ref(), &player).await?;

    Ok(Json(summarize(&attempts)))
}

/// Clears a player's history.
pub async fn clear_history(
    State(store): State<Arc<dyn KeyValueStore>>,
    Extension(player): Extension<PlayerId>,
) -> Result<impl IntoResponse, AppError> {
    clear(store.as_ref(), &player).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn player() -> PlayerId {
        PlayerId::new("test-player").unwrap()
    }

    fn request(score: u32, total_questions: u32) -> RecordAttemptRequest {
        RecordAttemptRequest {
            score,
            total_questions,
            time_spent_ms: Some(42_000),
            questions: None,
        }
    }

    #[tokio::test]
    async fn record_computes_percentage_and_appends() {
        let store = MemoryStore::new();
        let player = player();

        let attempt = record(&store, &player, request(8, 10)).await.unwrap();
        assert_eq!(attempt.percentage, 80);
        assert_eq!(attempt.time_spent_ms, 42_000);

        let history = load_history(&store, &player).await.unwrap();
        assert_eq!(history, vec![attempt]);
    }

    #[tokio::test]
    async fn record_rejects_degenerate_input() {
        let store = MemoryStore::new();
        let player = player();

        let err = record(&store, &player, request(0, 0)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = record(&store, &player, request(11, 10)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        assert!(load_history(&store, &player).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_is_capped_and_evicts_oldest_first() {
        let store = MemoryStore::new();
        let player = player();

        for i in 0..51 {
            record(&store, &player, request(i % 11, 10)).await.unwrap();
        }

        let history = load_history(&store, &player).await.unwrap();
        assert_eq!(history.len(), HISTORY_CAP);
        // First recorded attempt (score 0) is gone, second (score 1) leads.
        assert_eq!(history[0].score, 1);
        assert_eq!(history[HISTORY_CAP - 1].score, 50 % 11);
    }

    #[tokio::test]
    async fn corrupt_history_slot_reads_as_empty() {
        let store = MemoryStore::new();
        let player = player();

        store
            .set(&history_key(&player), "{not json")
            .await
            .unwrap();
        assert!(load_history(&store, &player).await.unwrap().is_empty());

        // The next record self-heals the slot.
        record(&store, &player, request(5, 10)).await.unwrap();
        assert_eq!(load_history(&store, &player).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn history_round_trips_through_the_store() {
        let store = MemoryStore::new();
        let player = player();

        let mut recorded = Vec::new();
        for score in [3, 7, 9] {
            recorded.push(record(&store, &player, request(score, 10)).await.unwrap());
        }

        assert_eq!(load_history(&store, &player).await.unwrap(), recorded);
    }

    #[tokio::test]
    async fn snapshot_tracks_running_totals_and_best() {
        let store = MemoryStore::new();
        let player = player();

        record(&store, &player, request(9, 10)).await.unwrap();
        record(&store, &player, request(5, 10)).await.unwrap();

        let snapshot = load_snapshot(&store, &player).await.unwrap();
        assert_eq!(snapshot.total_quizzes, 2);
        assert_eq!(snapshot.total_score, 14);
        assert_eq!(snapshot.total_questions, 20);
        assert_eq!(snapshot.best_score, 90);
        assert!(snapshot.best_score_date.is_some());
        assert_eq!(snapshot.last_quiz_date.map(|d| d >= snapshot.best_score_date.unwrap()), Some(true));
    }

    #[tokio::test]
    async fn clear_removes_everything_and_is_idempotent() {
        let store = MemoryStore::new();
        let player = player();

        record(&store, &player, request(5, 10)).await.unwrap();
        clear(&store, &player).await.unwrap();

        assert!(load_history(&store, &player).await.unwrap().is_empty());
        assert_eq!(
            load_snapshot(&store, &player).await.unwrap(),
            ProgressSnapshot::default()
        );

        // Clearing an already-empty history is a no-op, not an error.
        clear(&store, &player).await.unwrap();
    }
}
