use async_trait::async_trait;

use crate::{
    auth::repo_types::{User, UserCredentials},
    store::PgStore,
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Inserts the user unless the email is already registered.
    /// Returns `false` when the email was taken.
    async fn create_user(&self, user: &User, password_hash: &str) -> anyhow::Result<bool>;

    async fn find_credentials_by_email(&self, email: &str)
        -> anyhow::Result<Option<UserCredentials>>;

    /// Loads the public user record, without the password hash.
    async fn find_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
}

#[async_trait]
impl UserRepo for PgStore {
    async fn create_user(&self, user: &User, password_hash: &str) -> anyhow::Result<bool> {
        // The UNIQUE(email) constraint arbitrates concurrent signups.
        let inserted = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO users (id, email, name, profile_image, is_premium, created_at, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (email) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.profile_image)
        .bind(user.is_premium)
        .bind(user.created_at)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(inserted.is_some())
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<UserCredentials>> {
        let row = sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT id, email, name, profile_image, is_premium, created_at, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, profile_image, is_premium, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
