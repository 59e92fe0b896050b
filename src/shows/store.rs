use sqlx::SqliteExecutor;
use time::PrimitiveDateTime;

use crate::models::{NewShow, UpcomingShow};

pub async fn insert(db: impl SqliteExecutor<'_>, show: &NewShow) -> sqlx::Result<i64> {
    let result = sqlx::query("INSERT INTO show (venue_id,artist_id,start_time) VALUES (?,?,?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Start times of the artist's shows strictly after `now`.
pub async fn future_start_times(
    db: impl SqliteExecutor<'_>,
    artist_id: i64,
    now: PrimitiveDateTime,
) -> sqlx::Result<Vec<PrimitiveDateTime>> {
    sqlx::query_scalar("SELECT start_time FROM show WHERE artist_id=? AND start_time > ? ORDER BY start_time")
        .bind(artist_id)
        .bind(now)
        .fetch_all(db)
        .await
}

/// Shows after `now`, grouped by venue.
pub async fn upcoming(db: impl SqliteExecutor<'_>, now: PrimitiveDateTime) -> sqlx::Result<Vec<UpcomingShow>> {
    sqlx::query_as(
        "SELECT venue.id AS venue_id, venue.name AS venue_name, \
                artist.id AS artist_id, artist.name AS artist_name, artist.image_link AS artist_image_link, \
                show.start_time AS start_time \
         FROM show \
         JOIN venue ON venue.id = show.venue_id \
         JOIN artist ON artist.id = show.artist_id \
         WHERE show.start_time > ? \
         ORDER BY show.venue_id, show.start_time",
    )
    .bind(now)
    .fetch_all(db)
    .await
}
