/// Application-level errors
///
/// Missing users or movies are not errors: the store adapters resolve them to
/// empty rating vectors or absent titles. Only store-level failures
/// (connection, timeout) surface here.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
