use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    booking, include_res,
    models::{ArtistShow, Schedule},
    res::{self, escape},
    session::take_flashes,
    AppError, AppResult, RecordId,
};

use super::store;

#[debug_handler]
pub(crate) async fn artists(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let artists = store::list(&db_pool).await?;

    let body = include_res!(str, "/pages/artists/artists.html")
        .replace("{search_forms}", &res::search_forms("/artists/search"))
        .replace("{artist_items}", &res::list_items("/artists", &artists));

    Ok(res::layout("Artists", &take_flashes(&session).await?, &body).into_response())
}

fn show_cards(shows: &[ArtistShow]) -> String {
    shows
        .iter()
        .map(|show| {
            res::show_card(
                &format!("/venues/{}", show.venue_id),
                &show.venue_image_link,
                &show.venue_name,
                show.start_time,
            )
        })
        .collect()
}

#[debug_handler]
pub(crate) async fn artist(
    RecordId(artist_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(artist) = store::find(&db_pool, artist_id).await? else {
        return Err(AppError::not_found("artist", artist_id));
    };
    let schedule = Schedule::split(store::shows(&db_pool, artist_id).await?, booking::now());

    let seeking = if artist.seeking_venue {
        include_res!(str, "/pages/artists/seeking.html")
            .replace("{seeking_description}", &escape(&artist.seeking_description))
    } else {
        String::new()
    };

    let body = include_res!(str, "/pages/artists/artist.html")
        .replace("{id}", &artist.id.to_string())
        .replace("{name}", &escape(&artist.name))
        .replace("{genres}", &res::genre_tags(&artist.genres))
        .replace("{city}", &escape(&artist.city))
        .replace("{state}", &escape(&artist.state))
        .replace("{phone}", &escape(&artist.phone))
        .replace("{website}", &escape(&artist.website))
        .replace("{facebook_link}", &escape(&artist.facebook_link))
        .replace("{seeking_venue}", &artist.seeking_venue.to_string())
        .replace("{seeking}", &seeking)
        .replace("{image_link}", &escape(&artist.image_link))
        .replace("{upcoming_shows_count}", &schedule.upcoming.len().to_string())
        .replace("{upcoming_shows}", &show_cards(&schedule.upcoming))
        .replace("{past_shows_count}", &schedule.past.len().to_string())
        .replace("{past_shows}", &show_cards(&schedule.past));

    Ok(res::layout(&artist.name, &take_flashes(&session).await?, &body).into_response())
}
