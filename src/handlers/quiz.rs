// src/handlers/quiz.rs

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{Json, extract::State, response::IntoResponse};
use tokio::sync::RwLock;

use crate::{error::AppError, models::question::QuizQuestion, state::AppState};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

struct CachedPaper {
    questions: Vec<QuizQuestion>,
    fetched_at: Instant,
}

/// In-process cache of the last good question-bank fetch.
#[derive(Clone, Default)]
pub struct QuestionCache {
    inner: Arc<RwLock<Option<CachedPaper>>>,
}

impl QuestionCache {
    /// The cached paper, if it is younger than `max_age`.
    async fn fresh(&self, max_age: Duration) -> Option<Vec<QuizQuestion>> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|paper| paper.fetched_at.elapsed() < max_age)
            .map(|paper| paper.questions.clone())
    }

    /// The cached paper regardless of age.
    async fn any(&self) -> Option<Vec<QuizQuestion>> {
        let guard = self.inner.read().await;
        guard.as_ref().map(|paper| paper.questions.clone())
    }

    async fn put(&self, questions: Vec<QuizQuestion>) {
        let mut guard = self.inner.write().await;
        *guard = Some(CachedPaper {
            questions,
            fetched_at: Instant::now(),
        });
    }
}

async fn fetch_questions(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Vec<QuizQuestion>, reqwest::Error> {
    let response = client
        .get(endpoint)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Vec<QuizQuestion>>().await
}

/// Returns the current quiz paper.
///
/// Proxies the external question bank behind an in-process revalidation
/// window. Upstream failure degrades to the last good paper, then to an
/// empty list; the frontend treats an empty list as "quiz unavailable".
pub async fn get_questions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let max_age = Duration::from_secs(state.config.questions_revalidate_secs);

    if let Some(questions) = state.question_cache.fresh(max_age).await {
        return Ok(Json(questions));
    }

    match fetch_questions(&state.http, &state.config.questions_endpoint).await {
        Ok(questions) if !questions.is_empty() => {
            state.question_cache.put(questions.clone()).await;
            Ok(Json(questions))
        }
        Ok(_) => {
            tracing::error!("Question bank returned an empty paper");
            Ok(Json(state.question_cache.any().await.unwrap_or_default()))
        }
        Err(e) => {
            tracing::error!("Failed to fetch quiz questions: {:?}", e);
            Ok(Json(state.question_cache.any().await.unwrap_or_default()))
        }
    }
}
