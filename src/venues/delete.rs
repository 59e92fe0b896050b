use axum::{debug_handler, extract::State, response::{IntoResponse, Response}, Json};
use serde_json::json;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{session::flash, AppError, AppResult, RecordId};

use super::store;

/// Removes the venue and its shows. Answers `{"success": true}` for the page script.
#[debug_handler]
pub(crate) async fn delete_venue(
    RecordId(venue_id): RecordId,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(name) = store::delete(&db_pool, venue_id).await? else {
        return Err(AppError::not_found("venue", venue_id));
    };

    flash(&session, format!("{name} is deleted successfully.")).await?;
    Ok(Json(json!({ "success": true })).into_response())
}
