//! Persistence layer for users and their favorite planets and characters.
//!
//! The schema itself lives in the `entity` (models & relations) and `migration` (table DDL &
//! constraints) crates. This crate wraps them with repositories for each table, services that
//! enforce the cross-table rules (cascading user deletion, favorite validation), and the
//! configuration & startup code needed to connect to a database.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
