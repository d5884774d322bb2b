//! Tests for UserService::delete_user method.
//!
//! Deleting a user must remove all of their favorites in the same transaction, without
//! touching other users' favorites or the favorited planets & characters.

use holonet::{error::Error, service::user::UserService};
use holonet_test_utils::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests deleting a user who has favorites.
///
/// Expected: Ok(true), no favorite rows remain referencing the user
#[tokio::test]
async fn deletes_user_and_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_mock_user("a@x.com").await?;
    let other_user = test.user().insert_mock_user("b@x.com").await?;
    let planet_model = test.catalog().insert_mock_planet("Tatooine").await?;
    let character_model = test.catalog().insert_mock_character("Luke", None).await?;
    test.user()
        .insert_planet_favorite(user_model.id, planet_model.id)
        .await?;
    test.user()
        .insert_character_favorite(user_model.id, character_model.id)
        .await?;
    test.user()
        .insert_planet_favorite(other_user.id, planet_model.id)
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.delete_user(user_model.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(entity::prelude::User::find_by_id(user_model.id)
        .one(&test.db)
        .await?
        .is_none());
    let orphaned = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::UserId.eq(user_model.id))
        .count(&test.db)
        .await?;
    assert_eq!(orphaned, 0);
    // Other users' favorites & the favorited rows are untouched
    let remaining = entity::prelude::Favorite::find().count(&test.db).await?;
    assert_eq!(remaining, 1);
    assert!(entity::prelude::Planet::find_by_id(planet_model.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a user without favorites.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_user_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_mock_user("a@x.com").await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.delete_user(user_model.id).await;

    assert!(matches!(result, Ok(true)));

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let nonexistent_user_id = 1;
    let user_service = UserService::new(&test.db);
    let result = user_service.delete_user(nonexistent_user_id).await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}

/// Tests that a failed user delete restores the favorites already deleted in the transaction.
///
/// A trigger aborts the user row delete, which runs after the user's favorites are removed.
///
/// Expected: Err with DbErr, user & favorite still present
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_mock_user("a@x.com").await?;
    let planet_model = test.catalog().insert_mock_planet("Tatooine").await?;
    test.user()
        .insert_planet_favorite(user_model.id, planet_model.id)
        .await?;
    test.db
        .execute_unprepared(
            r#"CREATE TRIGGER abort_user_delete BEFORE DELETE ON "user"
            BEGIN SELECT RAISE(ABORT, 'user delete aborted'); END;"#,
        )
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.delete_user(user_model.id).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert!(entity::prelude::User::find_by_id(user_model.id)
        .one(&test.db)
        .await?
        .is_some());
    let favorites = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::UserId.eq(user_model.id))
        .count(&test.db)
        .await?;
    assert_eq!(favorites, 1);

    Ok(())
}
