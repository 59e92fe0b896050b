use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{artists, include_res, res, session::take_flashes, venues, AppResult};

const RECENT_LIMIT: i64 = 10;

#[debug_handler]
pub async fn index(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let recent_venues = venues::store::recent(&db_pool, RECENT_LIMIT).await?;
    let recent_artists = artists::store::recent(&db_pool, RECENT_LIMIT).await?;

    let body = include_res!(str, "/pages/home.html")
        .replace("{venue_items}", &res::list_items("/venues", &recent_venues))
        .replace("{artist_items}", &res::list_items("/artists", &recent_artists));

    Ok(res::layout("Home", &take_flashes(&session).await?, &body).into_response())
}
