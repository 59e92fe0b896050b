use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::{NewVenue, Summary, Venue, VenueShow, genres};

pub async fn insert(db: impl SqliteExecutor<'_>, venue: &NewVenue) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO venue (name,city,state,address,phone,image_link,facebook_link,website,genres,seeking_talent,seeking_description) \
         VALUES (?,?,?,?,?,?,?,?,?,?,?)",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(genres::join(&venue.genres))
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(db)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<Option<Venue>> {
    sqlx::query_as("SELECT * FROM venue WHERE id=?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn exists(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<bool> {
    Ok(sqlx::query("SELECT 1 FROM venue WHERE id=?")
        .bind(id)
        .fetch_optional(db)
        .await?
        .is_some())
}

/// Overwrites every listing field. Returns false if no venue has this id.
pub async fn update(db: impl SqliteExecutor<'_>, id: i64, venue: &NewVenue) -> sqlx::Result<bool> {
    let result = sqlx::query(
        "UPDATE venue SET name=?,city=?,state=?,address=?,phone=?,image_link=?,facebook_link=?,website=?,genres=?,seeking_talent=?,seeking_description=? \
         WHERE id=?",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(genres::join(&venue.genres))
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Deletes the venue and every show booked there. Returns the venue's name, or `None` if
/// it did not exist. Nothing is removed unless all of it is.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> sqlx::Result<Option<String>> {
    let mut tx = db_pool.begin().await?;

    let Some((name,)): Option<(String,)> = sqlx::query_as("SELECT name FROM venue WHERE id=?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
    else {
        return Ok(None);
    };

    let shows = sqlx::query("DELETE FROM show WHERE venue_id=?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    sqlx::query("DELETE FROM venue WHERE id=?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(venue_id = id, shows, "deleted venue {name}");
    Ok(Some(name))
}

pub async fn recent(db: impl SqliteExecutor<'_>, limit: i64) -> sqlx::Result<Vec<Summary>> {
    sqlx::query_as("SELECT id,name FROM venue ORDER BY id DESC LIMIT ?")
        .bind(limit)
        .fetch_all(db)
        .await
}

/// Every show booked at the venue, earliest first.
pub async fn shows(db: impl SqliteExecutor<'_>, venue_id: i64) -> sqlx::Result<Vec<VenueShow>> {
    sqlx::query_as(
        "SELECT artist.id AS artist_id, artist.name AS artist_name, artist.image_link AS artist_image_link, show.start_time AS start_time \
         FROM show JOIN artist ON artist.id = show.artist_id \
         WHERE show.venue_id=? ORDER BY show.start_time",
    )
    .bind(venue_id)
    .fetch_all(db)
    .await
}
