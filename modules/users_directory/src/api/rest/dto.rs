use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{NewUser, User, UserId, UserUpdate};

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// REST DTO for creating a new user.
///
/// Any identifier supplied by the caller is ignored; the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserReq {
    pub username: String,
    pub email: String,
}

/// REST DTO for replacing a user's mutable fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserReq {
    pub username: String,
    pub email: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}

impl From<UpdateUserReq> for UserUpdate {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}
