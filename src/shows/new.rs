use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}};
use axum_extra::extract::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    booking::{self, BookingError},
    forms::ShowForm,
    include_res, res,
    session::{flash, take_flashes},
    AppError, AppResult,
};

#[debug_handler]
pub(crate) async fn new_show_page(session: Session) -> AppResult<Response> {
    Ok(res::layout(
        "Book a show",
        &take_flashes(&session).await?,
        include_res!(str, "/pages/shows/form.html"),
    )
    .into_response())
}

#[debug_handler]
pub(crate) async fn new_show(
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<ShowForm>,
) -> AppResult<Response> {
    let show = match form.validate() {
        Ok(show) => show,
        Err(err) => {
            flash(&session, format!("Show could not be listed: {err}.")).await?;
            return Ok(Redirect::to("/shows/create").into_response());
        }
    };

    match booking::book_show(&db_pool, show, booking::now()).await {
        Ok(_) => {
            flash(&session, "Show was successfully listed!").await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(BookingError::Conflict { artist_id, booked }) => {
            tracing::info!(artist_id, %booked, "booking rejected");
            flash(&session, "This time was booked. Please reselect.").await?;
            Ok(Redirect::to("/shows/create").into_response())
        }
        Err(BookingError::UnknownArtist(artist_id)) => Err(AppError::not_found("artist", artist_id)),
        Err(BookingError::UnknownVenue(venue_id)) => Err(AppError::not_found("venue", venue_id)),
        Err(BookingError::Database(err)) => {
            tracing::error!("could not list show: {err:?}");
            flash(&session, "An error occurred. Show could not be listed.").await?;
            Ok(Redirect::to("/").into_response())
        }
    }
}
