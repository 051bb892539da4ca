//! Credential verification and the login entry point built on top of it.

use bcrypt::verify;

use crate::errors::{auth::CREDENTIALS_SIGNIN, AuthError};
use crate::models::{LoginForm, User};
use crate::services::UserStore;
use crate::validation::credentials_are_well_formed;

/// Outcome of a login attempt that did not fail unexpectedly.
#[derive(Debug)]
pub enum LoginOutcome {
    SignedIn(User),
    /// UI-facing rejection code.
    Rejected(&'static str),
}

/// Look up `form.email` and compare the password against the stored hash.
///
/// `Ok(None)` is a normal rejection (malformed credentials, unknown user,
/// wrong password). A lookup that breaks is `AuthError::LookupFailed`.
pub async fn verify_credentials(
    users: &dyn UserStore,
    form: &LoginForm,
) -> Result<Option<User>, AuthError> {
    if !credentials_are_well_formed(form) {
        tracing::info!("Invalid credentials");
        return Ok(None);
    }

    let user = users.find_user_by_email(&form.email).await.map_err(|e| {
        tracing::error!("Failed to fetch user {}: {}", form.email, e);
        AuthError::LookupFailed(e)
    })?;

    let Some(user) = user else {
        tracing::info!("Invalid credentials");
        return Ok(None);
    };

    if verify(&form.password, &user.password)? {
        Ok(Some(user))
    } else {
        tracing::info!("Invalid credentials");
        Ok(None)
    }
}

/// Sign-in orchestration: a rejection surfaces as `AuthError::CredentialsSignin`.
pub async fn sign_in(users: &dyn UserStore, form: &LoginForm) -> Result<User, AuthError> {
    verify_credentials(users, form)
        .await?
        .ok_or(AuthError::CredentialsSignin)
}

/// Login entry point. Credential mismatches become a rejection code; every
/// other failure is returned to the caller untouched.
pub async fn authenticate(users: &dyn UserStore, form: &LoginForm) -> Result<LoginOutcome, AuthError> {
    match sign_in(users, form).await {
        Ok(user) => {
            tracing::info!("Signed in {}", user.email);
            Ok(LoginOutcome::SignedIn(user))
        }
        Err(AuthError::CredentialsSignin) => Ok(LoginOutcome::Rejected(CREDENTIALS_SIGNIN)),
        Err(e) => Err(e),
    }
}
