use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub image: String,
    pub specialization: String,
}

/// A single class. `trainer_name` and `trainer_image` are copied from the
/// trainer when the session is stored and are not kept in sync afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub trainer_id: String,
    pub trainer_name: String,
    pub trainer_image: String,
    pub category: String,
    /// Minutes.
    pub duration: i32,
    pub description: String,
    pub image: String,
    pub video_url: Option<String>,
}

impl Session {
    /// Builds a session carrying a snapshot of `trainer`'s name and image.
    pub fn by(trainer: &Trainer, id: &str, title: &str, category: &str, duration: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            trainer_id: trainer.id.clone(),
            trainer_name: trainer.name.clone(),
            trainer_image: trainer.image.clone(),
            category: category.into(),
            duration,
            description: String::new(),
            image: trainer.image.clone(),
            video_url: None,
        }
    }
}

/// Multi-day course. `sessions_count` is a stored display hint, not a live count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub duration_days: i32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: String,
    pub sessions_count: i32,
}
