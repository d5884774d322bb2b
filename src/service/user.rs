//! User service.
//!
//! Owns the only cascading rule in the schema: deleting a user deletes their favorites.

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{user::UserError, Error},
    model::{
        favorite::FavoriteDto,
        user::{NewUser, UserDto},
    },
    service::{favorite::to_favorite_dtos, retry::RetryContext},
};

/// Service for managing user accounts.
///
/// Read operations and the cascading delete use automatic retry logic for transient
/// connection failures.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(UserError::EmailTaken)` - Another user already has this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserDto, Error> {
        let email = new_user.email.clone();

        let user = UserRepository::new(self.db)
            .create(new_user)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Error::from(UserError::EmailTaken(email))
                }
                _ => Error::from(err),
            })?;

        tracing::info!("Created user {}", user);

        Ok(UserDto::from(user))
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry(&format!("get user ID {}", user_id), move || async move {
                let user = UserRepository::new(db).get_by_id(user_id).await?;

                Ok::<_, Error>(user.map(UserDto::from))
            })
            .await
    }

    /// Retrieves a user's favorites with the names of the favorited planets & characters.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<FavoriteDto>))` - The user's favorites, oldest first
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    /// - `Err(Error::InternalError)` - A stored favorite violates the single target rule
    pub async fn get_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<FavoriteDto>>, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry(
                &format!("get favorites of user ID {}", user_id),
                move || async move {
                    if UserRepository::new(db).get_by_id(user_id).await?.is_none() {
                        return Ok(None);
                    }

                    let favorites = FavoriteRepository::new(db)
                        .get_many_by_user_id(user_id)
                        .await?;

                    Ok::<_, Error>(Some(to_favorite_dtos(db, favorites).await?))
                },
            )
            .await
    }

    /// Deletes a user along with all of their favorites.
    ///
    /// Both deletes run in a single transaction so a failure leaves the user and their
    /// favorites untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let db = self.db;

        RetryContext::new()
            .execute_with_retry(&format!("delete user ID {}", user_id), move || async move {
                let txn = db.begin().await?;

                let favorites = FavoriteRepository::new(&txn)
                    .delete_many_by_user_id(user_id)
                    .await?;
                let user = UserRepository::new(&txn).delete(user_id).await?;

                txn.commit().await?;

                if user.rows_affected == 0 {
                    tracing::debug!("User ID {} not found for deletion", user_id);
                    return Ok(false);
                }

                tracing::info!(
                    "Deleted user ID {} along with {} favorite(s)",
                    user_id,
                    favorites.rows_affected
                );

                Ok::<_, Error>(true)
            })
            .await
    }
}
