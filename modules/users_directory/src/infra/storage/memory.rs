//! In-memory implementation of the users repository.
//!
//! A single `RwLock` protects both the record map and the identifier
//! counter, so every write is one atomic lookup+mutate unit and identifier
//! assignment cannot race. Reads run concurrently under the read lock.
//! Nothing inside the critical sections blocks or awaits.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::model::{NewUser, User, UserId, UserUpdate};
use crate::domain::repo::UsersRepository;

struct StoreState {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

/// Concurrency-safe, process-local user store.
pub struct InMemoryUsersRepository {
    state: RwLock<StoreState>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User> {
        let mut state = self.state.write();

        let id = state.next_id;
        state.next_id += 1;

        let user = User {
            id,
            username: new_user.username,
            email: new_user.email,
        };
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let state = self.state.read();
        Ok(state.users.get(&id).cloned())
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> anyhow::Result<Option<User>> {
        let mut state = self.state.write();

        match state.users.get_mut(&id) {
            Some(user) => {
                user.username = update.username;
                user.email = update.email;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: UserId) -> anyhow::Result<bool> {
        let mut state = self.state.write();
        Ok(state.users.remove(&id).is_some())
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let state = self.state.read();
        Ok(state.users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(n: u32) -> NewUser {
        NewUser {
            username: format!("user{n}"),
            email: format!("user{n}@example.com"),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryUsersRepository::new();

        for expected in 1..=3u64 {
            let user = repo.insert(new_user(expected as u32)).await.unwrap();
            assert_eq!(user.id, expected);
        }

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 3);
    }

    #[tokio::test]
    async fn find_returns_stored_record() {
        let repo = InMemoryUsersRepository::new();
        let created = repo.insert(new_user(1)).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repo.find_by_id(999).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let repo = InMemoryUsersRepository::new();
        let created = repo.insert(new_user(1)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UserUpdate {
                    username: "renamed".into(),
                    email: "renamed@example.com".into(),
                },
            )
            .await
            .unwrap()
            .expect("record should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.username, "renamed");
        assert_eq!(updated.email, "renamed@example.com");

        let absent = repo
            .update(
                999,
                UserUpdate {
                    username: "x".into(),
                    email: "x@example.com".into(),
                },
            )
            .await
            .unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn delete_removes_record_once() {
        let repo = InMemoryUsersRepository::new();
        let created = repo.insert(new_user(1)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
        // Second delete reports the record as missing.
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reissued() {
        let repo = InMemoryUsersRepository::new();
        let first = repo.insert(new_user(1)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.insert(new_user(2)).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let repo = InMemoryUsersRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_inserts_assign_unique_ids() {
        let repo = Arc::new(InMemoryUsersRepository::new());
        let mut handles = Vec::new();

        for n in 0..64u32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(
                async move { repo.insert(new_user(n)).await },
            ));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        ids.sort_unstable();
        let expected: Vec<UserId> = (1..=64).collect();
        assert_eq!(ids, expected, "ids must be 1..=64 with no gaps or dupes");
    }
}
