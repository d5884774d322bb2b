use thiserror::Error;

use crate::model::favorite::FavoriteTarget;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {0} does not exist")]
    UserNotFound(i32),
    #[error("Cannot favorite {0} as it does not exist")]
    TargetNotFound(FavoriteTarget),
    #[error("User ID {user_id} has already favorited {target}")]
    AlreadyFavorited { user_id: i32, target: FavoriteTarget },
}
