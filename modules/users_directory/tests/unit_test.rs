use users_directory::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto};
use users_directory::contract::{error::UsersDirectoryError, model::*};
use users_directory::domain::error::DomainError;
// Note: These internal module imports are only for testing
// External consumers should only use the `contract` module

#[test]
fn test_contract_models() {
    let user = User {
        id: 1,
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
    };

    assert_eq!(user.id, 1);
    assert_eq!(user.username, "testuser");
    assert_eq!(user.email, "test@example.com");

    let new_user = NewUser {
        username: "newuser".to_string(),
        email: "new@example.com".to_string(),
    };

    assert_eq!(new_user.username, "newuser");
    assert_eq!(new_user.email, "new@example.com");

    let update = UserUpdate {
        username: "renamed".to_string(),
        email: "renamed@example.com".to_string(),
    };

    assert_eq!(update.username, "renamed");
    assert_eq!(update.email, "renamed@example.com");
}

#[test]
fn test_contract_errors() {
    let error = UsersDirectoryError::not_found(7);

    match error {
        UsersDirectoryError::NotFound { id } => assert_eq!(id, 7),
        _ => panic!("Expected NotFound error"),
    }

    let error = UsersDirectoryError::internal();

    match error {
        UsersDirectoryError::Internal => {}
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_domain_errors() {
    let error = DomainError::user_not_found(42);

    match error {
        DomainError::UserNotFound { id } => assert_eq!(id, 42),
        _ => panic!("Expected UserNotFound error"),
    }

    let error = DomainError::storage("store failure");

    match error {
        DomainError::Storage { message } => assert_eq!(message, "store failure"),
        _ => panic!("Expected Storage error"),
    }
}

#[test]
fn test_rest_dto_conversions() {
    let user = User {
        id: 3,
        username: "dto".to_string(),
        email: "dto@example.com".to_string(),
    };

    let dto = UserDto::from(user.clone());
    assert_eq!(dto.id, user.id);
    assert_eq!(dto.username, user.username);
    assert_eq!(dto.email, user.email);

    let req = CreateUserReq {
        username: "created".to_string(),
        email: "created@example.com".to_string(),
    };
    let new_user: NewUser = req.into();
    assert_eq!(new_user.username, "created");
    assert_eq!(new_user.email, "created@example.com");

    let req = UpdateUserReq {
        username: "updated".to_string(),
        email: "updated@example.com".to_string(),
    };
    let update: UserUpdate = req.into();
    assert_eq!(update.username, "updated");
    assert_eq!(update.email, "updated@example.com");
}

#[test]
fn test_user_dto_wire_shape() {
    let dto = UserDto {
        id: 1,
        username: "wire".to_string(),
        email: "wire@example.com".to_string(),
    };

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": 1, "username": "wire", "email": "wire@example.com"})
    );
}

#[test]
fn test_create_req_ignores_unknown_id_field() {
    // Caller-supplied identifiers are not part of the request contract.
    let req: CreateUserReq =
        serde_json::from_str(r#"{"id": 99, "username": "a", "email": "a@x.com"}"#).unwrap();
    assert_eq!(req.username, "a");
    assert_eq!(req.email, "a@x.com");
}
