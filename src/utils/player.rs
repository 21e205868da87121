// src/utils/player.rs

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

/// Header carrying the anonymous player identifier.
pub const PLAYER_ID_HEADER: &str = "x-player-id";

const MAX_PLAYER_ID_LEN: usize = 64;

/// Anonymous per-browser player identifier.
///
/// The frontend generates one id per browser profile and sends it with
/// every history request; it scopes the persisted slots the way
/// browser-local storage scoped them when the history lived client-side.
#[derive(Debug, Clone)]
pub struct PlayerId(String);

impl PlayerId {
    /// Accepts trimmed, non-empty ids of at most 64 chars drawn from
    /// `[A-Za-z0-9_-]`.
    pub fn new(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.len() > MAX_PLAYER_ID_LEN {
            return None;
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(PlayerId(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Axum Middleware: player identification.
///
/// Validates the 'X-Player-Id' header and injects `PlayerId` into the
/// request extensions for the history handlers.
/// A missing or malformed header is a 400 Bad Request.
pub async fn player_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let player = req
        .headers()
        .get(PLAYER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(PlayerId::new);

    match player {
        Some(player) => {
            req.extensions_mut().insert(player);
            Ok(next.run(req).await)
        }
        None => Err(StatusCode::BAD_REQUEST),
    }
}
