use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::UsersDirectoryApi,
    error::UsersDirectoryError,
    model::{NewUser, User, UserId, UserUpdate},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the UsersDirectoryApi trait that delegates to the domain service
pub struct UsersDirectoryLocalClient {
    service: Arc<Service>,
}

impl UsersDirectoryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersDirectoryApi for UsersDirectoryLocalClient {
    async fn get_user(&self, id: UserId) -> anyhow::Result<User> {
        self.service
            .get_user(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        self.service
            .list_users()
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        self.service
            .create_user(new_user)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> anyhow::Result<User> {
        self.service
            .update_user(id, update)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_user(&self, id: UserId) -> anyhow::Result<()> {
        self.service
            .delete_user(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::UserNotFound { id } => UsersDirectoryError::not_found(id),
        DomainError::Storage { .. } => UsersDirectoryError::internal(),
    };

    anyhow::Error::new(contract_error)
}
