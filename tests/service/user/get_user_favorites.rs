//! Tests for UserService::get_user_favorites method.
//!
//! Verifies reverse navigation from a user to their favorites, including resolution of
//! planet & character names.

use holonet::{model::favorite::FavoriteTargetDto, service::user::UserService};
use holonet_test_utils::prelude::*;

/// Tests retrieving favorites of both kinds in creation order.
///
/// Expected: Ok with the planet favorite followed by the character favorite
#[tokio::test]
async fn returns_favorites_with_names() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_mock_user("a@x.com").await?;
    let planet_model = test.catalog().insert_mock_planet("Tatooine").await?;
    let character_model = test
        .catalog()
        .insert_mock_character("Luke Skywalker", Some(planet_model.id))
        .await?;
    test.user()
        .insert_planet_favorite(user_model.id, planet_model.id)
        .await?;
    test.user()
        .insert_character_favorite(user_model.id, character_model.id)
        .await?;

    let user_service = UserService::new(&test.db);
    let favorites = user_service
        .get_user_favorites(user_model.id)
        .await
        .unwrap()
        .unwrap();

    let targets: Vec<FavoriteTargetDto> = favorites.into_iter().map(|f| f.target).collect();
    assert_eq!(
        targets,
        vec![
            FavoriteTargetDto::Planet {
                id: planet_model.id,
                name: "Tatooine".to_string()
            },
            FavoriteTargetDto::Character {
                id: character_model.id,
                name: "Luke Skywalker".to_string()
            },
        ]
    );

    Ok(())
}

/// Tests retrieving favorites of a user who has none.
///
/// Expected: Ok with Some(empty)
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user_model = test.user().insert_mock_user("a@x.com").await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user_favorites(user_model.id).await;

    assert!(matches!(result, Ok(Some(favorites)) if favorites.is_empty()));

    Ok(())
}

/// Tests retrieving favorites of a nonexistent user.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let nonexistent_user_id = 1;
    let user_service = UserService::new(&test.db);
    let result = user_service.get_user_favorites(nonexistent_user_id).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
