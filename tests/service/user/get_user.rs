//! Tests for UserService::get_user method.

use holonet::{error::Error, service::user::UserService};
use holonet_test_utils::prelude::*;

/// Tests retrieving an existing user.
///
/// Expected: Ok with Some(user)
#[tokio::test]
async fn returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_mock_user("a@x.com").await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(user_model.id).await;

    assert!(result.is_ok());
    let maybe_user = result.unwrap();
    assert!(matches!(maybe_user, Some(user) if user.email == "a@x.com"));

    Ok(())
}

/// Tests retrieving a nonexistent user.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let nonexistent_user_id = 1;
    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(nonexistent_user_id).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(1).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
