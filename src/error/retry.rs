use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient connection problems)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition & connection errors are transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Constraint violations, query errors, type conversion & schema errors won't
                // resolve by retrying
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_)
            | Self::UserError(_)
            | Self::FavoriteError(_)
            | Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
