//! Scheduling a show for an artist at a venue.
//!
//! An artist cannot be booked within three hours (inclusive) of any of
//! their shows that has not started yet. Venues may be double-booked.

use sqlx::SqlitePool;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::{
    artists,
    models::NewShow,
    shows,
    venues,
};

pub const MIN_GAP: Duration = Duration::hours(3);

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("artist {0} does not exist")]
    UnknownArtist(i64),
    #[error("venue {0} does not exist")]
    UnknownVenue(i64),
    #[error("artist {artist_id} is already booked at {booked}")]
    Conflict {
        artist_id: i64,
        booked: PrimitiveDateTime,
    },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The current UTC wall-clock time, which is how start times are stored.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Rejects `proposed` if it lies within [`MIN_GAP`] of any of `future_bookings`.
pub fn check_conflict(
    artist_id: i64,
    future_bookings: &[PrimitiveDateTime],
    proposed: PrimitiveDateTime,
) -> Result<(), BookingError> {
    match future_bookings
        .iter()
        .find(|&&booked| (booked - proposed).abs() <= MIN_GAP)
    {
        Some(&booked) => Err(BookingError::Conflict { artist_id, booked }),
        None => Ok(()),
    }
}

/// Creates the show if both records exist and the artist is free. Returns the new show id.
///
/// Bookings that started at or before `now` never conflict.
pub async fn book_show(
    db_pool: &SqlitePool,
    show: NewShow,
    now: PrimitiveDateTime,
) -> Result<i64, BookingError> {
    let mut tx = db_pool.begin().await?;

    if !artists::store::exists(&mut *tx, show.artist_id).await? {
        return Err(BookingError::UnknownArtist(show.artist_id));
    }
    if !venues::store::exists(&mut *tx, show.venue_id).await? {
        return Err(BookingError::UnknownVenue(show.venue_id));
    }

    let booked = shows::store::future_start_times(&mut *tx, show.artist_id, now).await?;
    check_conflict(show.artist_id, &booked, show.start_time)?;

    let show_id = shows::store::insert(&mut *tx, &show).await?;
    tx.commit().await?;

    tracing::info!(
        show_id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        start_time = %show.start_time,
        "show booked"
    );
    Ok(show_id)
}
