use axum::{debug_handler, extract::State, response::{IntoResponse, Redirect, Response}};
use axum_extra::extract::Form;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    forms::SearchForm,
    res,
    search::{self, SearchQuery},
    session::take_flashes,
    AppResult,
};

#[debug_handler]
pub(crate) async fn search_artists(
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<SearchForm>,
) -> AppResult<Response> {
    let Some(query) = SearchQuery::from_form(form) else {
        return Ok(Redirect::to("/artists").into_response());
    };

    let results = search::search_artists(&db_pool, &query).await?;
    let body = res::search_results("/artists", &query.label(), &results);
    Ok(res::layout("Artist search", &take_flashes(&session).await?, &body).into_response())
}
