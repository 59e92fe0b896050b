use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}};
use axum_extra::extract::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    forms::VenueForm,
    include_res,
    models::{NewVenue, Venue},
    res::{self, escape},
    session::{flash, take_flashes},
    AppResult,
};

use super::store;

/// The listing form, filled from `venue`.
pub(super) fn venue_form(heading: &str, action: &str, submit: &str, venue: &Venue) -> String {
    include_res!(str, "/pages/venues/form.html")
        .replace("{heading}", heading)
        .replace("{action}", action)
        .replace("{submit}", submit)
        .replace("{name}", &escape(&venue.name))
        .replace("{city}", &escape(&venue.city))
        .replace("{state}", &escape(&venue.state))
        .replace("{address}", &escape(&venue.address))
        .replace("{phone}", &escape(&venue.phone))
        .replace("{genre_options}", &res::genre_options(&venue.genres))
        .replace("{image_link}", &escape(&venue.image_link))
        .replace("{facebook_link}", &escape(&venue.facebook_link))
        .replace("{website}", &escape(&venue.website))
        .replace("{seeking_talent}", res::checked(venue.seeking_talent))
        .replace("{seeking_description}", &escape(&venue.seeking_description))
}

#[debug_handler]
pub(crate) async fn new_venue_page(session: Session) -> AppResult<Response> {
    let body = venue_form("List a new venue", "/venues/create", "Create venue", &Venue::default());
    Ok(res::layout("New venue", &take_flashes(&session).await?, &body).into_response())
}

async fn insert_venue(db_pool: &SqlitePool, venue: &NewVenue) -> sqlx::Result<i64> {
    let mut tx = db_pool.begin().await?;
    let venue_id = store::insert(&mut *tx, venue).await?;
    tx.commit().await?;
    Ok(venue_id)
}

#[debug_handler]
pub(crate) async fn new_venue(
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<VenueForm>,
) -> AppResult<Response> {
    let name = form.display_name().to_owned();
    let venue = match form.validate() {
        Ok(venue) => venue,
        Err(err) => {
            flash(&session, format!("Venue {name} could not be listed: {err}.")).await?;
            return Ok(Redirect::to("/venues/create").into_response());
        }
    };

    match insert_venue(&db_pool, &venue).await {
        Ok(venue_id) => {
            tracing::info!(venue_id, "listed venue {name}");
            flash(&session, format!("Venue {name} was successfully listed!")).await?;
        }
        Err(err) => {
            tracing::error!("could not list venue {name}: {err:?}");
            flash(&session, format!("An error occurred. Venue {name} could not be listed.")).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}
