use sqlx::SqliteExecutor;

use crate::models::{Artist, ArtistShow, NewArtist, Summary, genres};

pub async fn insert(db: impl SqliteExecutor<'_>, artist: &NewArtist) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO artist (name,city,state,phone,genres,image_link,website,facebook_link,seeking_venue,seeking_description) \
         VALUES (?,?,?,?,?,?,?,?,?,?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(genres::join(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(db)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<Option<Artist>> {
    sqlx::query_as("SELECT * FROM artist WHERE id=?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn exists(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<bool> {
    Ok(sqlx::query("SELECT 1 FROM artist WHERE id=?")
        .bind(id)
        .fetch_optional(db)
        .await?
        .is_some())
}

pub async fn update(db: impl SqliteExecutor<'_>, id: i64, artist: &NewArtist) -> sqlx::Result<bool> {
    let result = sqlx::query(
        "UPDATE artist SET name=?,city=?,state=?,phone=?,genres=?,image_link=?,website=?,facebook_link=?,seeking_venue=?,seeking_description=? \
         WHERE id=?",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(genres::join(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list(db: impl SqliteExecutor<'_>) -> sqlx::Result<Vec<Summary>> {
    sqlx::query_as("SELECT id,name FROM artist ORDER BY name, id")
        .fetch_all(db)
        .await
}

pub async fn recent(db: impl SqliteExecutor<'_>, limit: i64) -> sqlx::Result<Vec<Summary>> {
    sqlx::query_as("SELECT id,name FROM artist ORDER BY id DESC LIMIT ?")
        .bind(limit)
        .fetch_all(db)
        .await
}

pub async fn shows(db: impl SqliteExecutor<'_>, artist_id: i64) -> sqlx::Result<Vec<ArtistShow>> {
    sqlx::query_as(
        "SELECT venue.id AS venue_id, venue.name AS venue_name, venue.image_link AS venue_image_link, show.start_time AS start_time \
         FROM show JOIN venue ON venue.id = show.venue_id \
         WHERE show.artist_id=? ORDER BY show.start_time",
    )
    .bind(artist_id)
    .fetch_all(db)
    .await
}
