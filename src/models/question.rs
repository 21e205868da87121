// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A question record from the external bank.
///
/// The bank owns its schema; records pass through this service untouched
/// so the frontend and the bank can evolve without backend changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizQuestion(pub serde_json::Value);
