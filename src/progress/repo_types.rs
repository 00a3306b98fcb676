use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// One progress entry. Entries are only ever appended, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserProgress {
    pub id: String,
    pub user_id: String,
    pub session_id: Option<String>,
    pub program_id: Option<String>,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub progress_percentage: i32,
}
