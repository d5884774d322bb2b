//! Data access layer repositories.
//!
//! One repository per table. Every repository borrows any [`sea_orm::ConnectionTrait`], so the
//! same methods run against a pooled connection or inside a transaction. Relations are only
//! navigated through explicit queries keyed by foreign ID.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
