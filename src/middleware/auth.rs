use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
    body::Body,
};
use tower_sessions::Session;

/// Session key holding the signed-in user's email.
pub const USER_SESSION_KEY: &str = "user_session";

/// Keeps anonymous visitors out of the dashboard and signed-in users off the login page.
pub async fn require_auth(
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let protected = path == "/dashboard" || path.starts_with("/dashboard/");
    let on_login = path == "/login";

    if !protected && !on_login {
        return next.run(req).await;
    }

    let signed_in = match session.get::<String>(USER_SESSION_KEY).await {
        Ok(user) => user.is_some(),
        Err(e) => {
            tracing::warn!("Session read failed: {}", e);
            false
        }
    };

    match (signed_in, protected) {
        (false, true) => Redirect::to("/login").into_response(),
        (true, false) => Redirect::to("/dashboard").into_response(),
        _ => next.run(req).await,
    }
}
