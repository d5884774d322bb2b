//! Tests for UserService::create_user method.

use holonet::{
    error::{user::UserError, Error},
    model::user::NewUser,
    service::user::UserService,
};
use holonet_test_utils::prelude::*;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "hunter2".to_string(),
        first_name: Some("Leia".to_string()),
        last_name: Some("Organa".to_string()),
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with an active user
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.create_user(new_user("leia@x.com")).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "leia@x.com");
    assert_eq!(user.first_name.as_deref(), Some("Leia"));
    assert!(user.is_active);

    Ok(())
}

/// Tests creating a user with an email that is already in use.
///
/// Expected: Err with UserError::EmailTaken
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("leia@x.com")
        .build()
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.create_user(new_user("leia@x.com")).await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::EmailTaken(email))) if email == "leia@x.com"
    ));

    Ok(())
}
