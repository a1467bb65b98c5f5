use async_trait::async_trait;

use crate::contract::model::{NewUser, User, UserId, UserUpdate};

/// Public API trait for the users_directory module that other modules can use
#[async_trait]
pub trait UsersDirectoryApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: UserId) -> anyhow::Result<User>;

    /// List all users; ordering is unspecified
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;

    /// Create a new user; the assigned identifier is returned in the record
    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Replace a user's mutable fields
    async fn update_user(&self, id: UserId, update: UserUpdate) -> anyhow::Result<User>;

    /// Delete a user by ID
    async fn delete_user(&self, id: UserId) -> anyhow::Result<()>;
}
