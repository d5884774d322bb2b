//! Shared test tooling for holonet.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables and fixture rows
//! are needed, then the resulting [`TestContext`] exposes the in-memory SQLite database and
//! fixture helpers for inserting further rows during the test itself.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
