use axum::{
    middleware::from_fn,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tower_sessions::cookie::SameSite;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{config::Config, handlers, middleware, state::AppState};

pub fn router(state: AppState, config: &Config) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_name(config.session.cookie_name.clone());

    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        // Auth routes
        .route("/login", get(handlers::serve_login_page).post(handlers::handle_login))
        .route("/logout", get(handlers::handle_logout))
        // Dashboard routes
        .route("/dashboard", get(handlers::serve_dashboard))
        .route(
            "/dashboard/invoices",
            get(handlers::serve_invoice_list).post(handlers::create_invoice),
        )
        .route("/dashboard/invoices/:id/edit", get(handlers::serve_edit_invoice))
        .route("/dashboard/invoices/:id", post(handlers::update_invoice))
        .route("/dashboard/invoices/:id/delete", post(handlers::delete_invoice))
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.upload.max_body_size)),
        )
        .with_state(state)
}
