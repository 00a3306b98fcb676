use async_trait::async_trait;
use tokio::sync::RwLock;

use super::FETCH_LIMIT;
use crate::{
    auth::{
        repo::UserRepo,
        repo_types::{User, UserCredentials},
    },
    catalog::{
        repo::CatalogRepo,
        repo_types::{Program, Session, Trainer},
    },
    progress::{repo::ProgressRepo, repo_types::UserProgress},
    seed::data::SeedData,
};

/// In-process store backing the handler tests.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserCredentials>>,
    trainers: RwLock<Vec<Trainer>>,
    sessions: RwLock<Vec<Session>>,
    programs: RwLock<Vec<Program>>,
    progress: RwLock<Vec<UserProgress>>,
}

fn capped<T>(items: impl Iterator<Item = T>) -> Vec<T> {
    items.take(FETCH_LIMIT as usize).collect()
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn create_user(&self, user: &User, password_hash: &str) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.user.email == user.email) {
            return Ok(false);
        }
        users.push(UserCredentials {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(true)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> anyhow::Result<Option<UserCredentials>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user.id == id).map(|u| u.user.clone()))
    }
}

#[async_trait]
impl CatalogRepo for MemoryStore {
    async fn list_trainers(&self) -> anyhow::Result<Vec<Trainer>> {
        Ok(capped(self.trainers.read().await.iter().cloned()))
    }

    async fn list_sessions(&self, category: Option<&str>) -> anyhow::Result<Vec<Session>> {
        let sessions = self.sessions.read().await;
        Ok(capped(
            sessions
                .iter()
                .filter(|s| category.map_or(true, |c| s.category == c))
                .cloned(),
        ))
    }

    async fn get_session(&self, id: &str) -> anyhow::Result<Option<Session>> {
        Ok(self.sessions.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn list_programs(&self) -> anyhow::Result<Vec<Program>> {
        Ok(capped(self.programs.read().await.iter().cloned()))
    }

    async fn get_program(&self, id: &str) -> anyhow::Result<Option<Program>> {
        Ok(self.programs.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn seed_if_empty(&self, data: &SeedData) -> anyhow::Result<bool> {
        // The trainers write lock plays the role of the advisory lock.
        let mut trainers = self.trainers.write().await;
        if !trainers.is_empty() {
            return Ok(false);
        }
        trainers.extend(data.trainers.iter().cloned());
        self.sessions.write().await.extend(data.sessions.iter().cloned());
        self.programs.write().await.extend(data.programs.iter().cloned());
        Ok(true)
    }
}

#[async_trait]
impl ProgressRepo for MemoryStore {
    async fn insert_progress(&self, record: &UserProgress) -> anyhow::Result<()> {
        self.progress.write().await.push(record.clone());
        Ok(())
    }

    async fn list_progress(&self, user_id: &str) -> anyhow::Result<Vec<UserProgress>> {
        let progress = self.progress.read().await;
        Ok(capped(progress.iter().filter(|p| p.user_id == user_id).cloned()))
    }
}
