use anyhow::Context;
use async_trait::async_trait;

use crate::{
    catalog::repo_types::{Program, Session, Trainer},
    seed::data::SeedData,
    store::{PgStore, FETCH_LIMIT},
};

/// Arbitrary key for the advisory lock that serializes seeding.
const SEED_LOCK_KEY: i64 = 0x5EED;

#[async_trait]
pub trait CatalogRepo: Send + Sync {
    async fn list_trainers(&self) -> anyhow::Result<Vec<Trainer>>;

    /// Exact-match filter on `category` when given.
    async fn list_sessions(&self, category: Option<&str>) -> anyhow::Result<Vec<Session>>;

    async fn get_session(&self, id: &str) -> anyhow::Result<Option<Session>>;

    async fn list_programs(&self) -> anyhow::Result<Vec<Program>>;

    async fn get_program(&self, id: &str) -> anyhow::Result<Option<Program>>;

    /// Inserts `data` only if no trainer exists yet, atomically with that check.
    /// Returns `false` when the catalog was already populated.
    async fn seed_if_empty(&self, data: &SeedData) -> anyhow::Result<bool>;
}

#[async_trait]
impl CatalogRepo for PgStore {
    async fn list_trainers(&self) -> anyhow::Result<Vec<Trainer>> {
        let rows = sqlx::query_as::<_, Trainer>(
            r#"
            SELECT id, name, bio, image, specialization
            FROM trainers
            LIMIT $1
            "#,
        )
        .bind(FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_sessions(&self, category: Option<&str>) -> anyhow::Result<Vec<Session>> {
        let rows = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, title, trainer_id, trainer_name, trainer_image, category,
                   duration, description, image, video_url
            FROM sessions
            WHERE $1::TEXT IS NULL OR category = $1
            LIMIT $2
            "#,
        )
        .bind(category)
        .bind(FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_session(&self, id: &str) -> anyhow::Result<Option<Session>> {
        let row = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, title, trainer_id, trainer_name, trainer_image, category,
                   duration, description, image, video_url
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_programs(&self) -> anyhow::Result<Vec<Program>> {
        let rows = sqlx::query_as::<_, Program>(
            r#"
            SELECT id, title, description, image, duration_days, start_date, end_date,
                   category, sessions_count
            FROM programs
            LIMIT $1
            "#,
        )
        .bind(FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_program(&self, id: &str) -> anyhow::Result<Option<Program>> {
        let row = sqlx::query_as::<_, Program>(
            r#"
            SELECT id, title, description, image, duration_days, start_date, end_date,
                   category, sessions_count
            FROM programs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn seed_if_empty(&self, data: &SeedData) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await.context("begin tx")?;

        // Held until commit/rollback, so concurrent first calls queue up here.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await
            .context("take seed lock")?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trainers")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.rollback().await.context("rollback tx")?;
            return Ok(false);
        }

        for t in &data.trainers {
            sqlx::query(
                r#"
                INSERT INTO trainers (id, name, bio, image, specialization)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&t.id)
            .bind(&t.name)
            .bind(&t.bio)
            .bind(&t.image)
            .bind(&t.specialization)
            .execute(&mut *tx)
            .await
            .context("insert trainer")?;
        }

        for s in &data.sessions {
            sqlx::query(
                r#"
                INSERT INTO sessions (id, title, trainer_id, trainer_name, trainer_image,
                                      category, duration, description, image, video_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&s.id)
            .bind(&s.title)
            .bind(&s.trainer_id)
            .bind(&s.trainer_name)
            .bind(&s.trainer_image)
            .bind(&s.category)
            .bind(s.duration)
            .bind(&s.description)
            .bind(&s.image)
            .bind(&s.video_url)
            .execute(&mut *tx)
            .await
            .context("insert session")?;
        }

        for p in &data.programs {
            sqlx::query(
                r#"
                INSERT INTO programs (id, title, description, image, duration_days,
                                      start_date, end_date, category, sessions_count)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&p.id)
            .bind(&p.title)
            .bind(&p.description)
            .bind(&p.image)
            .bind(p.duration_days)
            .bind(&p.start_date)
            .bind(&p.end_date)
            .bind(&p.category)
            .bind(p.sessions_count)
            .execute(&mut *tx)
            .await
            .context("insert program")?;
        }

        tx.commit().await.context("commit tx")?;
        Ok(true)
    }
}

/// Run against a live database with `DATABASE_URL` set and `cargo test -- --ignored`.
#[cfg(test)]
mod pg_tests {
    use sqlx::PgPool;

    use super::*;
    use crate::seed::data;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL"]
    async fn seeding_happens_once(pool: PgPool) {
        let store = PgStore { pool };
        assert!(store.seed_if_empty(&data::demo()).await.unwrap());
        assert!(!store.seed_if_empty(&data::demo()).await.unwrap());

        assert_eq!(store.list_trainers().await.unwrap().len(), 3);
        assert_eq!(store.list_programs().await.unwrap().len(), 4);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL"]
    async fn category_filter_is_exact(pool: PgPool) {
        let store = PgStore { pool };
        store.seed_if_empty(&data::demo()).await.unwrap();

        let yoga = store.list_sessions(Some("Yoga")).await.unwrap();
        assert_eq!(yoga.len(), 2);
        assert!(yoga.iter().all(|s| s.category == "Yoga"));

        assert!(store.list_sessions(Some("yoga")).await.unwrap().is_empty());
        assert_eq!(store.list_sessions(None).await.unwrap().len(), 5);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL"]
    async fn lookups_by_id(pool: PgPool) {
        let store = PgStore { pool };
        store.seed_if_empty(&data::demo()).await.unwrap();

        let session = store.get_session("session-2").await.unwrap().unwrap();
        assert_eq!(session.title, "Vinyasa Flow Yoga");
        assert!(store.get_session("session-99").await.unwrap().is_none());
        assert!(store.get_program("program-99").await.unwrap().is_none());
    }
}
