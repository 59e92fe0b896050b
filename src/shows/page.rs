use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    booking, include_res,
    res::{self, escape, DateStyle},
    session::take_flashes,
    AppResult,
};

use super::store;

#[debug_handler]
pub(crate) async fn shows(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let show_items: String = store::upcoming(&db_pool, booking::now())
        .await?
        .iter()
        .map(|show| {
            include_res!(str, "/pages/shows/show_row.html")
                .replace("{artist_image_link}", &escape(&show.artist_image_link))
                .replace("{artist_id}", &show.artist_id.to_string())
                .replace("{artist_name}", &escape(&show.artist_name))
                .replace("{venue_id}", &show.venue_id.to_string())
                .replace("{venue_name}", &escape(&show.venue_name))
                .replace("{start_time}", &res::format_datetime(show.start_time, DateStyle::Medium))
        })
        .collect();

    let body = include_res!(str, "/pages/shows/shows.html").replace("{show_items}", &show_items);
    Ok(res::layout("Shows", &take_flashes(&session).await?, &body).into_response())
}
