//! Service layer.
//!
//! Services coordinate repositories for operations that span tables, translate storage
//! errors into domain errors, and retry transient connection failures.

pub mod favorite;
pub mod retry;
pub mod user;
