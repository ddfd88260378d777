use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::memory::MemStore,
    entities::user::{User, UserInsert},
    errors::AppError,
    repositories::mem_repo::MemUserRepo,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count_users(&self) -> Result<u64, AppError>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    /// Fails with `Conflict` when the username or email is already taken.
    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError>;
}

impl MemUserRepo {
    pub fn new(store: MemStore) -> Self {
        MemUserRepo { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepo {
    async fn count_users(&self) -> Result<u64, AppError> {
        Ok(self.store.read().users.len() as u64)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.store.read().users.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.store.read().users.find(|u| u.username == username).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.trim().to_lowercase();
        Ok(self.store.read().users.find(|u| u.email == email).cloned())
    }

    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        let collections = self.store.read();
        Ok(ids.iter().filter_map(|id| collections.users.get(*id).cloned()).collect())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.read().users.values().cloned().collect())
    }

    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError> {
        let mut collections = self.store.write();

        if collections.users.find(|u| u.username == user.username).is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if collections.users.find(|u| u.email == user.email).is_some() {
            return Err(AppError::Conflict("User with this email already exists".to_string()));
        }

        let created = collections.users.insert_with(|id| User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            name: user.name.clone(),
            user_type: user.user_type,
            created_at: Utc::now(),
        });

        Ok(created)
    }
}
