use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

pub const DEFAULT_PROFILE_IMAGE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=default";

/// User record as returned to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub is_premium: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name,
            profile_image: Some(DEFAULT_PROFILE_IMAGE.to_string()),
            is_premium: false,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// User row joined with its Argon2 hash; only the login path loads this.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}
