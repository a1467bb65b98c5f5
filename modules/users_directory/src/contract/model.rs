/// Identifier of a user record. Assigned by the repository only, starting at
/// 1 and strictly increasing; never reused after deletion.
pub type UserId = u64;

/// Pure user model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Data for creating a new user; the identifier is chosen by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Full replacement of a user's mutable fields. Pure overwrite, no merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
}
