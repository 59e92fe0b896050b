use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}};
use axum_extra::extract::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    forms::VenueForm,
    res,
    session::{flash, take_flashes},
    AppError, AppResult, RecordId,
};

use super::{new::venue_form, store};

#[debug_handler]
pub(crate) async fn edit_venue_page(
    RecordId(venue_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(venue) = store::find(&db_pool, venue_id).await? else {
        return Err(AppError::not_found("venue", venue_id));
    };

    let body = venue_form(
        &format!("Edit venue {}", res::escape(&venue.name)),
        &format!("/venues/{venue_id}/edit"),
        "Save changes",
        &venue,
    );
    Ok(res::layout("Edit venue", &take_flashes(&session).await?, &body).into_response())
}

#[debug_handler]
pub(crate) async fn edit_venue(
    RecordId(venue_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<VenueForm>,
) -> AppResult<Response> {
    let venue = match form.validate() {
        Ok(venue) => venue,
        Err(err) => {
            flash(&session, format!("Venue could not be updated: {err}.")).await?;
            return Ok(Redirect::to(&format!("/venues/{venue_id}/edit")).into_response());
        }
    };

    let mut tx = db_pool.begin().await?;
    if !store::update(&mut *tx, venue_id, &venue).await? {
        return Err(AppError::not_found("venue", venue_id));
    }
    tx.commit().await?;

    tracing::info!(venue_id, "updated venue {}", venue.name);
    flash(&session, format!("Venue {} was successfully updated!", venue.name)).await?;
    Ok(Redirect::to(&format!("/venues/{venue_id}")).into_response())
}
