pub mod appresult;
pub mod artists;
pub mod booking;
pub mod config;
pub mod db;
pub mod forms;
pub mod index;
pub mod logging;
pub mod models;
pub mod res;
pub mod search;
pub mod session;
pub mod shows;
pub mod venues;

use axum::{
    Router,
    extract::FromRef,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

pub use appresult::{AppError, AppResult, RecordId};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Every route, with sessions (for flash messages) and request tracing.
pub fn app(app_state: AppState, session_idle: time::Duration) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(session_idle));

    Router::new()
        .route("/", get(index::index))
        .nest("/venues", venues::router())
        .nest("/artists", artists::router())
        .nest("/shows", shows::router())
        .fallback(not_found)
        .with_state(app_state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(include_res!(str, "/pages/errors/404.html")),
    )
}
