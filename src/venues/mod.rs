mod delete;
mod edit;
mod new;
mod page;
mod search;
pub mod store;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::venues))
        .route("/search", post(search::search_venues))
        .route("/create", get(new::new_venue_page).post(new::new_venue))
        .route("/{id}", get(page::venue).delete(delete::delete_venue))
        .route("/{id}/edit", get(edit::edit_venue_page).post(edit::edit_venue))
}
