use async_trait::async_trait;

use crate::contract::model::{NewUser, User, UserId, UserUpdate};

/// Port for the domain layer: storage operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a new user, assigning the next sequential identifier.
    ///
    /// The identifier counter starts at 1 and advances exactly once per
    /// successful call; identifiers of deleted records are never reissued.
    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Load a user by id.
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;

    /// Overwrite the mutable fields of an existing user, keeping `id`.
    /// Returns the updated record, or `None` if no record exists for `id`.
    async fn update(&self, id: UserId, update: UserUpdate) -> anyhow::Result<Option<User>>;

    /// Delete by id. Returns true if a record was deleted.
    async fn delete(&self, id: UserId) -> anyhow::Result<bool>;

    /// List all users. Ordering is unspecified; empty stores yield an empty vec.
    async fn list(&self) -> anyhow::Result<Vec<User>>;
}
