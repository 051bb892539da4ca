use thiserror::Error;

use super::StoreError;

/// Signal raised by `sign_in` when the submitted credentials do not match.
pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Expected rejection; the login entry point turns it into a UI code.
    #[error("CredentialsSignin")]
    CredentialsSignin,

    /// The user lookup itself broke, as opposed to finding nobody.
    #[error("Failed to fetch user.")]
    LookupFailed(#[source] StoreError),

    #[error("Stored password hash is unusable: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
