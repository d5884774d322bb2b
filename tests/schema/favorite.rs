//! Favorite constraints: the per-user unique pairs, foreign keys and the single target check.

use holonet_test_utils::prelude::*;

use super::{is_check_violation, is_foreign_key_violation, is_unique_violation};

/// Tests the user + planet and user + character unique constraints.
///
/// A second favorite of the same planet fails, a different planet succeeds, and a
/// character favorite is unaffected by the planet constraint.
///
/// Expected: Err only for the duplicate planet favorite
#[tokio::test]
async fn enforces_unique_pairs_independently() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("a@x.com")
        .with_mock_planet("Tatooine")
        .with_mock_planet("Hoth")
        .with_mock_character("Luke", Some("Tatooine"))
        .build()
        .await?;
    let user = test.user();

    // Fixtures are inserted in order on a fresh database, so IDs start at 1
    assert!(user.insert_planet_favorite(1, 1).await.is_ok());
    assert!(is_unique_violation(&user.insert_planet_favorite(1, 1).await));
    assert!(user.insert_planet_favorite(1, 2).await.is_ok());
    assert!(user.insert_character_favorite(1, 1).await.is_ok());
    assert!(is_unique_violation(&user.insert_character_favorite(1, 1).await));

    Ok(())
}

/// Tests inserting a favorite for a user that does not exist.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let nonexistent_user_id = 1;
    let result = test
        .user()
        .insert_planet_favorite(nonexistent_user_id, 1)
        .await;

    assert!(is_foreign_key_violation(&result));

    Ok(())
}

/// Tests inserting a favorite that references both a planet and a character.
///
/// Expected: Err with a check constraint violation
#[tokio::test]
async fn rejects_both_targets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("a@x.com")
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke", Some("Tatooine"))
        .build()
        .await?;

    let result = test.user().insert_favorite(1, Some(1), Some(1)).await;

    assert!(is_check_violation(&result));

    Ok(())
}

/// Tests inserting a favorite that references neither a planet nor a character.
///
/// Expected: Err with a check constraint violation
#[tokio::test]
async fn rejects_missing_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("a@x.com")
        .build()
        .await?;

    let result = test.user().insert_favorite(1, None, None).await;

    assert!(is_check_violation(&result));

    Ok(())
}
