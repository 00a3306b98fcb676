use async_trait::async_trait;

use crate::{
    progress::repo_types::UserProgress,
    store::{PgStore, FETCH_LIMIT},
};

#[async_trait]
pub trait ProgressRepo: Send + Sync {
    /// Always appends; earlier entries for the same target are left alone.
    async fn insert_progress(&self, record: &UserProgress) -> anyhow::Result<()>;

    async fn list_progress(&self, user_id: &str) -> anyhow::Result<Vec<UserProgress>>;
}

#[async_trait]
impl ProgressRepo for PgStore {
    async fn insert_progress(&self, record: &UserProgress) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_progress (id, user_id, session_id, program_id, completed,
                                       completed_at, progress_percentage)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.session_id)
        .bind(&record.program_id)
        .bind(record.completed)
        .bind(record.completed_at)
        .bind(record.progress_percentage)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_progress(&self, user_id: &str) -> anyhow::Result<Vec<UserProgress>> {
        let rows = sqlx::query_as::<_, UserProgress>(
            r#"
            SELECT id, user_id, session_id, program_id, completed, completed_at,
                   progress_percentage
            FROM user_progress
            WHERE user_id = $1
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
