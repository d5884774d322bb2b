//! Factory functions for generating in-memory database models.
//!
//! These are model instances that don't require database interaction, suitable for unit
//! tests of conversions and formatting.

use chrono::Utc;

/// Create a mock user model with the provided ID and email.
pub fn mock_user_model(id: i32, email: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        email: email.to_string(),
        password: "password".to_string(),
        first_name: Some("Luke".to_string()),
        last_name: Some("Skywalker".to_string()),
        is_active: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock planet model with the provided ID and name.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some("200000".to_string()),
        diameter: Some("10465".to_string()),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock character model with the provided ID, name & optional homeworld ID.
pub fn mock_character_model(
    id: i32,
    name: &str,
    homeworld_id: Option<i32>,
) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        gender: Some("male".to_string()),
        birth_year: Some("19BBY".to_string()),
        height: Some("172".to_string()),
        mass: Some("77".to_string()),
        homeworld_id,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock favorite model.
///
/// Both targets may be passed to build rows that violate the single target rule.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
) -> entity::favorite::Model {
    entity::favorite::Model {
        id,
        user_id,
        planet_id,
        character_id,
        created_at: Utc::now().naive_utc(),
    }
}
