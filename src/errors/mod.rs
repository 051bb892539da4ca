// Error types for the dashboard, one enum per concern, built with thiserror.
use thiserror::Error;

pub mod auth;
pub mod cache;
pub mod response;
pub mod store;

pub use auth::AuthError;
pub use cache::{CacheError, CacheResult};
pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    // Session problems send the visitor back to the login page.
    #[error("Authentication error: {0}")]
    Auth(String),

    // Anything the credential flow could not turn into a rejection.
    #[error(transparent)]
    SignIn(#[from] AuthError),

    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Invoice {0} not found")]
    InvoiceNotFound(uuid::Uuid),
}

pub type AppResult<T> = Result<T, AppError>;
