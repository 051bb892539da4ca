use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use urlencoding;
use crate::errors::{AppError, AuthError};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication errors redirect to login
            AppError::Auth(msg) => {
                Redirect::to(&format!("/login?error={}", urlencoding::encode(&msg)))
                    .into_response()
            }

            AppError::SignIn(err) => convert_auth_error(err),

            // The cause is logged where it happened; callers only get a generic message
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database Error".to_string(),
            )
                .into_response(),

            AppError::File(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("File error: {}", e),
            )
                .into_response(),

            AppError::InvoiceNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Invoice {} not found", id),
            )
                .into_response(),
        }
    }
}

fn convert_auth_error(err: AuthError) -> Response {
    match err {
        // Normally caught by the login entry point before it gets here
        AuthError::CredentialsSignin => {
            Redirect::to(&format!("/login?error={}", err)).into_response()
        }

        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Sign-in failed: {}", err),
        )
            .into_response(),
    }
}
