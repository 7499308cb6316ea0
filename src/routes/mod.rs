//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the activity JSON API and the static front-end under a single Axum
//! router. The root path redirects to the front-end's entry page.

pub mod activities;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

/// Full application router: API routes, static assets under `/static`.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(redirect_root_to_index))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity}/signup", post(activities::signup))
        .route("/activities/{activity}/unregister", delete(activities::unregister))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
