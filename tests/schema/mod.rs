//! Constraint tests against the migrated schema.
//!
//! Rows are inserted directly through the entities, bypassing repositories & services, to
//! verify the database itself enforces each rule.

mod favorite;
mod unique;

use holonet_test_utils::prelude::*;
use sea_orm::SqlErr;

fn is_unique_violation<T>(result: &Result<T, TestError>) -> bool {
    match result {
        Err(TestError::DbErr(err)) => {
            matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        }
        _ => false,
    }
}

fn is_foreign_key_violation<T>(result: &Result<T, TestError>) -> bool {
    match result {
        Err(TestError::DbErr(err)) => {
            matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        }
        _ => false,
    }
}

/// SQLite reports check failures without a dedicated `SqlErr` variant, so match on the message.
fn is_check_violation<T>(result: &Result<T, TestError>) -> bool {
    match result {
        Err(TestError::DbErr(err)) => err.to_string().contains("CHECK constraint failed"),
        _ => false,
    }
}
