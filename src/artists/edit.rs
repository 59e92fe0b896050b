use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}};
use axum_extra::extract::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    forms::ArtistForm,
    res,
    session::{flash, take_flashes},
    AppError, AppResult, RecordId,
};

use super::{new::artist_form, store};

#[debug_handler]
pub(crate) async fn edit_artist_page(
    RecordId(artist_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(artist) = store::find(&db_pool, artist_id).await? else {
        return Err(AppError::not_found("artist", artist_id));
    };

    let body = artist_form(
        &format!("Edit artist {}", res::escape(&artist.name)),
        &format!("/artists/{artist_id}/edit"),
        "Save changes",
        &artist,
    );
    Ok(res::layout("Edit artist", &take_flashes(&session).await?, &body).into_response())
}

#[debug_handler]
pub(crate) async fn edit_artist(
    RecordId(artist_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let artist = match form.validate() {
        Ok(artist) => artist,
        Err(err) => {
            flash(&session, format!("Artist could not be updated: {err}.")).await?;
            return Ok(Redirect::to(&format!("/artists/{artist_id}/edit")).into_response());
        }
    };

    let mut tx = db_pool.begin().await?;
    if !store::update(&mut *tx, artist_id, &artist).await? {
        return Err(AppError::not_found("artist", artist_id));
    }
    tx.commit().await?;

    tracing::info!(artist_id, "updated artist {}", artist.name);
    flash(&session, format!("Artist {} was successfully updated!", artist.name)).await?;
    Ok(Redirect::to(&format!("/artists/{artist_id}")).into_response())
}
