// src/routes.rs

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{history, quiz, share, trivia},
    state::AppState,
    utils::player::player_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (quiz, history, trivia, share).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (slot store, config, question cache).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-player-id"),
        ]);

    let quiz_routes = Router::new().route("/questions", get(quiz::get_questions));

    let history_routes = Router::new()
        .route(
            "/",
            post(history::record_attempt)
                .get(history::list_history)
                .delete(history::clear_history),
        )
        .route("/progress", get(history::get_progress))
        // Every history slot is scoped by the caller's player id
        .layer(middleware::from_fn(player_middleware));

    let trivia_routes = Router::new()
        .route("/daily", get(trivia::get_daily_fact))
        .route("/random", get(trivia::get_random_fact))
        .route("/albums", get(trivia::list_albums))
        .route("/albums/{name}", get(trivia::get_album))
        .route("/songs", get(trivia::list_song_meanings))
        .route("/songs/random", get(trivia::get_random_song))
        .route("/events", get(trivia::list_events));

    let share_routes = Router::new()
        .route("/", post(share::dispatch_share))
        .route("/options", get(share::share_options))
        .route("/image", get(share::result_card));

    Router::new()
        .nest("/api/quiz", quiz_routes)
        .nest("/api/history", history_routes)
        .nest("/api/trivia", trivia_routes)
        .nest("/api/share", share_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
