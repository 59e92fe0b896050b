mod edit;
mod new;
mod page;
mod search;
pub mod store;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::artists))
        .route("/search", post(search::search_artists))
        .route("/create", get(new::new_artist_page).post(new::new_artist))
        .route("/{id}", get(page::artist))
        .route("/{id}/edit", get(edit::edit_artist_page).post(edit::edit_artist))
}
