// src/models/progress.rs

use serde::Serialize;

use super::attempt::Attempt;

/// Aggregate statistics derived from a player's attempt list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub total_quizzes: u32,

    /// Rounded mean of raw scores, not of percentages. The site has always
    /// displayed this value under its "Average Score" label; the units are
    /// kept as-is so returned numbers stay stable.
    pub average_score: u32,

    /// Highest percentage across all attempts.
    pub best_score: u32,

    /// Total questions answered across all attempts.
    pub total_questions: u64,

    /// Length of the trailing run of strictly improving attempts.
    pub streak: u32,

    /// Rounded net percentage change per quiz across the whole history.
    pub improvement: i32,
}

/// Derives summary statistics from a chronologically ordered attempt list.
///
/// Pure: the same list always yields the same summary. An empty list yields
/// the all-zero summary.
///
/// The streak/improvement pass walks adjacent pairs in order. A pair that
/// improves extends the streak; any other pair resets it, so the final
/// value only reflects the tail run. The percentage delta of every pair
/// feeds the improvement accumulator regardless of streak breaks.
pub fn summarize(attempts: &[Attempt]) -> ProgressSummary {
    if attempts.is_empty() {
        return ProgressSummary::default();
    }

    let total_quizzes = attempts.len() as u32;
    let total_score: u64 = attempts.iter().map(|a| a.score as u64).sum();
    let average_score = (total_score as f64 / total_quizzes as f64).round() as u32;
    let best_score = attempts.iter().map(|a| a.percentage).max().unwrap_or(0);
    let total_questions: u64 = attempts.iter().map(|a| a.total_questions as u64).sum();

    let mut streak = 0u32;
    let mut delta_acc = 0i64;

    for pair in attempts.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        delta_acc += curr.percentage as i64 - prev.percentage as i64;
        if curr.percentage > prev.percentage {
            streak += 1;
        } else {
            streak = 0;
        }
    }

    ProgressSummary {
        total_quizzes,
        average_score,
        best_score,
        total_questions,
        streak,
        improvement: (delta_acc as f64 / total_quizzes as f64).round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attempt::score_percentage;

    fn attempt(score: u32, total_questions: u32) -> Attempt {
        Attempt {
            id: format!("{}", score),
            timestamp: chrono::Utc::now(),
            score,
            total_questions,
            percentage: score_percentage(score, total_questions),
            time_spent_ms: 0,
            questions: Vec::new(),
        }
    }

    #[test]
    fn empty_history_yields_zero_summary() {
        assert_eq!(summarize(&[]), ProgressSummary::default());
    }

    #[test]
    fn single_attempt_has_no_streak_or_improvement() {
        let summary = summarize(&[attempt(7, 10)]);

        assert_eq!(summary.total_quizzes, 1);
        assert_eq!(summary.average_score, 7);
        assert_eq!(summary.best_score, 70);
        assert_eq!(summary.total_questions, 10);
        assert_eq!(summary.streak, 0);
        assert_eq!(summary.improvement, 0);
    }

    #[test]
    fn streak_resets_on_decrease_but_deltas_keep_accumulating() {
        // Percentages 50, 70, 60: the 70 -> 60 drop resets the streak while
        // the accumulated deltas are (70-50) + (60-70) = 10.
        let history = [attempt(5, 10), attempt(7, 10), attempt(6, 10)];
        let summary = summarize(&history);

        assert_eq!(summary.streak, 0);
        assert_eq!(summary.improvement, 3); // round(10 / 3)
        assert_eq!(summary.best_score, 70);
        assert_eq!(summary.total_quizzes, 3);
        assert_eq!(summary.total_questions, 30);
    }

    #[test]
    fn streak_counts_only_the_tail_run() {
        // 30, 50, 40, 60, 80: tail run 40 -> 60 -> 80 gives streak 2.
        let history = [
            attempt(3, 10),
            attempt(5, 10),
            attempt(4, 10),
            attempt(6, 10),
            attempt(8, 10),
        ];

        assert_eq!(summarize(&history).streak, 2);
    }

    #[test]
    fn average_is_over_raw_scores_not_percentages() {
        // Scores 5/10 and 9/10: percentages average to 70 but the raw
        // scores average to 7.
        let history = [attempt(5, 10), attempt(9, 10)];

        assert_eq!(summarize(&history).average_score, 7);
    }

    #[test]
    fn improvement_can_be_negative() {
        // 90 -> 50 -> 40: net change -50 over 3 quizzes.
        let history = [attempt(9, 10), attempt(5, 10), attempt(4, 10)];

        assert_eq!(summarize(&history).improvement, -17);
        assert_eq!(summarize(&history).streak, 0);
    }
}
