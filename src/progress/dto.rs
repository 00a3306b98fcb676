use serde::Deserialize;
use time::OffsetDateTime;

use super::repo_types::UserProgress;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ProgressUpdate {
    pub session_id: Option<String>,
    pub program_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub progress_percentage: i32,
}

impl ProgressUpdate {
    /// Percentage must lie in 0..=100 and exactly one target must be named.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0..=100).contains(&self.progress_percentage) {
            return Err(AppError::Validation(
                "progress_percentage must be between 0 and 100".into(),
            ));
        }
        let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        match (has(&self.session_id), has(&self.program_id)) {
            (true, false) | (false, true) => Ok(()),
            _ => Err(AppError::Validation(
                "exactly one of session_id or program_id is required".into(),
            )),
        }
    }

    pub fn into_record(self, user_id: &str) -> UserProgress {
        UserProgress {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            session_id: self.session_id.filter(|s| !s.is_empty()),
            program_id: self.program_id.filter(|s| !s.is_empty()),
            completed: self.completed,
            completed_at: self.completed.then(OffsetDateTime::now_utc),
            progress_percentage: self.progress_percentage,
        }
    }
}
