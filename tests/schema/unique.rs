//! Uniqueness of user emails and planet & character names.

use holonet_test_utils::prelude::*;

use super::is_unique_violation;

/// Tests inserting two users with the same email.
///
/// Expected: Err with a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("a@x.com")
        .build()
        .await?;

    let result = test.user().insert_mock_user("a@x.com").await;

    assert!(is_unique_violation(&result));

    Ok(())
}

/// Tests inserting two planets with the same name.
///
/// Expected: Err with a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_duplicate_planet_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let result = test.catalog().insert_mock_planet("Tatooine").await;

    assert!(is_unique_violation(&result));

    Ok(())
}

/// Tests inserting two characters with the same name.
///
/// Expected: Err with a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_duplicate_character_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_character("Luke", None)
        .build()
        .await?;

    let result = test.catalog().insert_mock_character("Luke", None).await;

    assert!(is_unique_violation(&result));

    Ok(())
}

/// Tests that a planet and a character may share a name.
///
/// Name uniqueness is per table.
///
/// Expected: Ok
#[tokio::test]
async fn allows_same_name_across_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Dagobah")
        .build()
        .await?;

    let result = test.catalog().insert_mock_character("Dagobah", None).await;

    assert!(result.is_ok());

    Ok(())
}
