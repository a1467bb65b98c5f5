use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::Path,
    http::StatusCode,
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::info;

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto};
use crate::api::rest::error::RestError;
use crate::contract::model::UserId;
use crate::domain::service::Service;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All stored users, in no particular order", body = Vec<UserDto>),
        (status = 500, description = "Store failure", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<UserDto>>, RestError> {
    let users = svc.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Invalid identifier", body = crate::api::rest::error::ErrorResponse),
        (status = 404, description = "No user for the identifier", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<UserDto>, RestError> {
    let Path(id) = id.map_err(|_| RestError::bad_request("Invalid user ID"))?;

    let user = svc.get_user(id).await?;
    Ok(Json(UserDto::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Created user with its assigned identifier", body = UserDto),
        (status = 400, description = "Malformed body", body = crate::api::rest::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<CreateUserReq>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), RestError> {
    let Json(req) = body.map_err(|_| RestError::bad_request("Invalid request body"))?;
    info!(username = %req.username, "creating user");

    let user = svc.create_user(req.into()).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Replace an existing user's mutable fields
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid identifier or body", body = crate::api::rest::error::ErrorResponse),
        (status = 404, description = "No user for the identifier", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<UserId>, PathRejection>,
    body: Result<Json<UpdateUserReq>, JsonRejection>,
) -> Result<Json<UserDto>, RestError> {
    let Path(id) = id.map_err(|_| RestError::bad_request("Invalid user ID"))?;
    let Json(req) = body.map_err(|_| RestError::bad_request("Invalid request body"))?;
    info!(user_id = id, "updating user");

    let user = svc.update_user(id, req.into()).await?;
    Ok(Json(UserDto::from(user)))
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid identifier", body = crate::api::rest::error::ErrorResponse),
        (status = 404, description = "No user for the identifier", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<StatusCode, RestError> {
    let Path(id) = id.map_err(|_| RestError::bad_request("Invalid user ID"))?;
    info!(user_id = id, "deleting user");

    svc.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
