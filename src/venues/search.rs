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
pub(crate) async fn search_venues(
    State(db_pool): State<SqlitePool>,
    session: Session,

    Form(form): Form<SearchForm>,
) -> AppResult<Response> {
    let Some(query) = SearchQuery::from_form(form) else {
        return Ok(Redirect::to("/venues").into_response());
    };

    let results = search::search_venues(&db_pool, &query).await?;
    let body = res::search_results("/venues", &query.label(), &results);
    Ok(res::layout("Venue search", &take_flashes(&session).await?, &body).into_response())
}
