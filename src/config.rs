// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Maximum number of attempts kept per player. Oldest entries are evicted
/// first once the list grows past this cap.
pub const HISTORY_CAP: usize = 50;

/// Default revalidation window for the external question bank, in seconds.
pub const DEFAULT_QUESTIONS_REVALIDATE_SECS: u64 = 900;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// External question-bank endpoint the quiz paper is fetched from.
    pub questions_endpoint: String,
    pub questions_revalidate_secs: u64,
    /// Public site URL embedded in share texts.
    pub site_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let questions_endpoint =
            env::var("QUESTIONS_ENDPOINT").expect("QUESTIONS_ENDPOINT must be set");

        let questions_revalidate_secs = env::var("QUESTIONS_REVALIDATE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QUESTIONS_REVALIDATE_SECS);

        let site_url = env::var("SITE_URL")
            .unwrap_or_else(|_| "https://tayler-swift.vercel.app".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            questions_endpoint,
            questions_revalidate_secs,
            site_url,
            rust_log,
        }
    }
}
