mod create_user;
mod delete_user;
mod get_user;
mod get_user_favorites;
