// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::handlers::quiz::QuestionCache;
use crate::storage::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub config: Config,
    pub question_cache: QuestionCache,
    pub http: reqwest::Client,
}

impl FromRef<AppState> for Arc<dyn KeyValueStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for QuestionCache {
    fn from_ref(state: &AppState) -> Self {
        state.question_cache.clone()
    }
}

impl FromRef<AppState> for reqwest::Client {
    fn from_ref(state: &AppState) -> Self {
        state.http.clone()
    }
}
