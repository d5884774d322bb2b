//! SeaORM entities for the holonet schema.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
