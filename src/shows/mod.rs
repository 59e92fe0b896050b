mod new;
mod page;
pub mod store;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::shows))
        .route("/create", get(new::new_show_page).post(new::new_show))
}
