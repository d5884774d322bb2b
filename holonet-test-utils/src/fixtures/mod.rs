//! Test fixture modules for inserting rows during test execution.
//!
//! - `user` - users and their favorites
//! - `catalog` - planets and characters

pub mod catalog;
pub mod user;
