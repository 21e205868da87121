// src/models/trivia.rs

use serde::{Deserialize, Serialize};

/// A single fact from the static trivia pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaFact {
    pub fact: String,
    pub category: String,
    pub icon: String,
}

/// Album metadata shown on the trivia pages.
#[derive(Debug, Clone, Serialize)]
pub struct Album {
    pub name: String,
    /// ISO date string, as published by the label.
    pub release_date: String,
    pub genre: String,
    pub fun_fact: String,
    pub track_count: u32,
    /// Discography-period label. Display theming only.
    pub era: String,
}

/// Album detail response with its sample track list.
#[derive(Debug, Serialize)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    pub sample_tracks: Vec<String>,
}

/// Meaning and backstory for one song.
#[derive(Debug, Clone, Serialize)]
pub struct SongMeaning {
    pub song: String,
    pub album: String,
    pub meaning: String,
    pub fun_fact: String,
}

/// Upcoming fan-calendar entry derived from the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingEvent {
    pub name: String,
    pub date: chrono::NaiveDate,
    pub description: String,
    pub icon: String,
}
