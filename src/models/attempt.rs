// src/models/attempt.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One recorded, completed quiz run.
///
/// `percentage` is always recomputed from `score` and `total_questions`
/// when the attempt is recorded, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// Wall-clock derived identifier (millisecond timestamp).
    pub id: String,

    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// Number of correctly answered questions.
    pub score: u32,

    pub total_questions: u32,

    /// `round(100 * score / total_questions)`.
    pub percentage: u32,

    /// Milliseconds spent on the quiz, 0 if the client did not report it.
    pub time_spent_ms: u64,

    /// Question records kept for later review. Their shape is owned by the
    /// external question bank and passes through untouched.
    pub questions: Vec<serde_json::Value>,
}

/// DTO for recording a completed quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordAttemptRequest {
    pub score: u32,

    #[validate(range(min = 1, message = "total_questions must be at least 1"))]
    pub total_questions: u32,

    pub time_spent_ms: Option<u64>,

    pub questions: Option<Vec<serde_json::Value>>,
}

/// Denormalized running totals, refreshed on every record.
///
/// The attempt list stays authoritative; this snapshot only spares readers
/// a full pass over the history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub last_quiz_date: Option<chrono::DateTime<chrono::Utc>>,
    pub total_quizzes: u64,
    pub total_score: u64,
    pub total_questions: u64,
    pub best_score: u32,
    pub best_score_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Display percentage for a score.
///
/// Callers must guard `total_questions > 0`.
pub fn score_percentage(score: u32, total_questions: u32) -> u32 {
    (score as f64 / total_questions as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(score_percentage(8, 10), 80);
        assert_eq!(score_percentage(1, 3), 33);
        assert_eq!(score_percentage(2, 3), 67);
        assert_eq!(score_percentage(0, 10), 0);
        assert_eq!(score_percentage(10, 10), 100);
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 5/8 = 62.5
        assert_eq!(score_percentage(5, 8), 63);
    }
}
