//! Data transfer objects and repository inputs.

pub mod catalog;
pub mod favorite;
pub mod user;
