use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Response, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use crate::auth::{authenticate, LoginOutcome};
use crate::errors::{auth::CREDENTIALS_SIGNIN, AppError, AppResult};
use crate::middleware::USER_SESSION_KEY;
use crate::models::LoginForm;
use crate::render::{escape_html, load_template};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    pub error: Option<String>,
}

pub async fn serve_login_page(Query(query): Query<LoginPageQuery>) -> AppResult<Response> {
    let template = load_template("login.html").await?;

    let error = match query.error.as_deref() {
        None => String::new(),
        Some(CREDENTIALS_SIGNIN) => "Invalid credentials.".to_string(),
        Some(other) => escape_html(other),
    };

    Ok(Html(template.replace("{{error}}", &error)).into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", login_form.email);

    match authenticate(state.users.as_ref(), &login_form).await? {
        LoginOutcome::SignedIn(user) => {
            session
                .insert(USER_SESSION_KEY, user.email)
                .await
                .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?;
            Ok(Redirect::to("/dashboard").into_response())
        }
        LoginOutcome::Rejected(code) => {
            Ok(Redirect::to(&format!("/login?error={}", code)).into_response())
        }
    }
}

#[axum::debug_handler]
pub async fn handle_logout(
    session: Session,
) -> Response {
    if let Err(e) = session.remove::<String>(USER_SESSION_KEY).await {
        tracing::warn!("Session removal error: {}", e);
    }
    Redirect::to("/login").into_response()
}
