use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("unreadable row: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
