use sqlx::FromRow;
use time::PrimitiveDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// What listings and search results show for a venue or artist.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Summary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: PrimitiveDateTime,
}

/// A show on a venue's page.
#[derive(Debug, Clone, FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: PrimitiveDateTime,
}

/// A show on an artist's page.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: PrimitiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct UpcomingShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: PrimitiveDateTime,
}

pub trait Scheduled {
    fn start_time(&self) -> PrimitiveDateTime;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

/// Shows split around "now": anything starting at or before it is past.
#[derive(Debug)]
pub struct Schedule<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T: Scheduled> Schedule<T> {
    pub fn split(shows: Vec<T>, now: PrimitiveDateTime) -> Self {
        let (upcoming, past): (Vec<T>, Vec<T>) = shows.into_iter().partition(|show| show.start_time() > now);
        Schedule { past, upcoming }
    }
}

pub mod genres {
    /// Joins genres into the stored comma-delimited form.
    pub fn join(genres: &[String]) -> String {
        genres
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Splits a stored genre string. Also reads array literals like `{"Jazz","Rock"}`.
    pub fn split(stored: &str) -> Vec<String> {
        let stored = stored.trim();
        let stored = stored
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(stored);

        stored
            .split(',')
            .map(|g| g.trim().trim_matches('"').trim())
            .filter(|g| !g.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn genres_join_then_split() {
        let stored = genres::join(&["Jazz".into(), " Reggae ".into(), "".into()]);
        assert_eq!(stored, "Jazz,Reggae");
        assert_eq!(genres::split(&stored), vec!["Jazz", "Reggae"]);
    }

    #[test]
    fn genres_split_reads_array_literals() {
        assert_eq!(
            genres::split(r#"{"Rock n Roll",Swing,"Classical"}"#),
            vec!["Rock n Roll", "Swing", "Classical"]
        );
        assert!(genres::split("{}").is_empty());
    }

    #[test]
    fn schedule_counts_now_as_past() {
        let now = datetime!(2030-01-01 12:00);
        let show = |start_time| ArtistShow {
            venue_id: 1,
            venue_name: "The Musical Hop".into(),
            venue_image_link: String::new(),
            start_time,
        };

        let schedule = Schedule::split(
            vec![
                show(datetime!(2029-12-31 20:00)),
                show(now),
                show(datetime!(2030-01-01 12:00:01)),
            ],
            now,
        );

        assert_eq!(schedule.past.len(), 2);
        assert_eq!(schedule.upcoming.len(), 1);
        assert_eq!(schedule.upcoming[0].start_time, datetime!(2030-01-01 12:00:01));
    }
}
