use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}};
use axum_extra::extract::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    forms::ArtistForm,
    include_res,
    models::{Artist, NewArtist},
    res::{self, escape},
    session::{flash, take_flashes},
    AppResult,
};

use super::store;

pub(super) fn artist_form(heading: &str, action: &str, submit: &str, artist: &Artist) -> String {
    include_res!(str, "/pages/artists/form.html")
        .replace("{heading}", heading)
        .replace("{action}", action)
        .replace("{submit}", submit)
        .replace("{name}", &escape(&artist.name))
        .replace("{city}", &escape(&artist.city))
        .replace("{state}", &escape(&artist.state))
        .replace("{phone}", &escape(&artist.phone))
        .replace("{genre_options}", &res::genre_options(&artist.genres))
        .replace("{image_link}", &escape(&artist.image_link))
        .replace("{facebook_link}", &escape(&artist.facebook_link))
        .replace("{website}", &escape(&artist.website))
        .replace("{seeking_venue}", res::checked(artist.seeking_venue))
        .replace("{seeking_description}", &escape(&artist.seeking_description))
}

#[debug_handler]
pub(crate) async fn new_artist_page(session: Session) -> AppResult<Response> {
    let body = artist_form("List a new artist", "/artists/create", "Create artist", &Artist::default());
    Ok(res::layout("New artist", &take_flashes(&session).await?, &body).into_response())
}

async fn insert_artist(db_pool: &SqlitePool, artist: &NewArtist) -> sqlx::Result<i64> {
    let mut tx = db_pool.begin().await?;
    let artist_id = store::insert(&mut *tx, artist).await?;
    tx.commit().await?;
    Ok(artist_id)
}

#[debug_handler]
pub(crate) async fn new_artist(
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let name = form.display_name().to_owned();
    let artist = match form.validate() {
        Ok(artist) => artist,
        Err(err) => {
            flash(&session, format!("Artist {name} could not be listed: {err}.")).await?;
            return Ok(Redirect::to("/artists/create").into_response());
        }
    };

    match insert_artist(&db_pool, &artist).await {
        Ok(artist_id) => {
            tracing::info!(artist_id, "listed artist {name}");
            flash(&session, format!("Artist {name} was successfully listed!")).await?;
        }
        Err(err) => {
            tracing::error!("could not list artist {name}: {err:?}");
            flash(&session, format!("An error occurred. Artist {name} could not be listed.")).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}
