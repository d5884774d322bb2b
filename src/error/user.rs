use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("A user with email {0} already exists")]
    EmailTaken(String),
}
