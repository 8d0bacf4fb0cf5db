use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ranking direction for tournament scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    HigherIsBetter,
    LowerIsBetter,
}

/// Display format for tournament scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreFormat {
    Numeric,
    Time,
}

/// Payload for the tournament creation dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTournamentConfig {
    /// The creating player's score to seed the tournament with.
    pub initial_score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_format: Option<ScoreFormat>,
    /// When the tournament should stop accepting scores. The platform
    /// applies its own default when absent.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_time: Option<DateTime<Utc>>,
    /// Opaque blob attached to the tournament.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Payload for the tournament reshare dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareTournamentPayload {
    pub score: i64,
    /// Opaque replay/share blob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}
