use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    booking, include_res,
    models::{Schedule, VenueShow},
    res::{self, escape},
    search,
    session::take_flashes,
    AppError, AppResult, RecordId,
};

use super::store;

#[debug_handler]
pub(crate) async fn venues(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let areas: String = search::venue_areas(&db_pool)
        .await?
        .iter()
        .map(|area| {
            include_res!(str, "/pages/venues/area.html")
                .replace("{city}", &escape(&area.city))
                .replace("{state}", &escape(&area.state))
                .replace("{venue_items}", &res::list_items("/venues", &area.venues))
        })
        .collect();

    let body = include_res!(str, "/pages/venues/venues.html")
        .replace("{search_forms}", &res::search_forms("/venues/search"))
        .replace("{areas}", &areas);

    Ok(res::layout("Venues", &take_flashes(&session).await?, &body).into_response())
}

fn show_cards(shows: &[VenueShow]) -> String {
    shows
        .iter()
        .map(|show| {
            res::show_card(
                &format!("/artists/{}", show.artist_id),
                &show.artist_image_link,
                &show.artist_name,
                show.start_time,
            )
        })
        .collect()
}

#[debug_handler]
pub(crate) async fn venue(
    RecordId(venue_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(venue) = store::find(&db_pool, venue_id).await? else {
        return Err(AppError::not_found("venue", venue_id));
    };
    let schedule = Schedule::split(store::shows(&db_pool, venue_id).await?, booking::now());

    let seeking = if venue.seeking_talent {
        include_res!(str, "/pages/venues/seeking.html")
            .replace("{seeking_description}", &escape(&venue.seeking_description))
    } else {
        String::new()
    };

    let body = include_res!(str, "/pages/venues/venue.html")
        .replace("{id}", &venue.id.to_string())
        .replace("{name}", &escape(&venue.name))
        .replace("{genres}", &res::genre_tags(&venue.genres))
        .replace("{address}", &escape(&venue.address))
        .replace("{city}", &escape(&venue.city))
        .replace("{state}", &escape(&venue.state))
        .replace("{phone}", &escape(&venue.phone))
        .replace("{website}", &escape(&venue.website))
        .replace("{facebook_link}", &escape(&venue.facebook_link))
        .replace("{seeking_talent}", &venue.seeking_talent.to_string())
        .replace("{seeking}", &seeking)
        .replace("{image_link}", &escape(&venue.image_link))
        .replace("{upcoming_shows_count}", &schedule.upcoming.len().to_string())
        .replace("{upcoming_shows}", &show_cards(&schedule.upcoming))
        .replace("{past_shows_count}", &schedule.past.len().to_string())
        .replace("{past_shows}", &show_cards(&schedule.past));

    Ok(res::layout(&venue.name, &take_flashes(&session).await?, &body).into_response())
}
