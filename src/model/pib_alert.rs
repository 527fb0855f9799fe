use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// At most one row per `article_id` (enforced by a unique constraint and by
/// the dispatcher checking for an existing row before inserting).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PibAlert {
    pub id: Uuid,
    pub article_id: Uuid,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub language: String,
    pub sentiment_score: f64,
    pub is_reviewed: bool,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
    pub email_sent: bool,
    pub email_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
