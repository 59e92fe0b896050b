//! Raw form submissions and their validation into typed records.
//!
//! Browsers send every text input, even when empty, and omit unchecked
//! checkboxes, so presence alone is never enough for a required field.

use serde::Deserialize;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::models::{NewArtist, NewShow, NewVenue};

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotAnId(&'static str),
    #[error("{0:?} is not a valid start time")]
    BadStartTime(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct VenueForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtistForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShowForm {
    pub artist_id: Option<String>,
    pub venue_id: Option<String>,
    pub start_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub search_term: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// The submitted value, kept as typed. Whitespace alone counts as missing.
fn required(value: Option<String>, field: &'static str) -> Result<String, FormError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FormError::Missing(field)),
    }
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn required_genres(genres: Vec<String>) -> Result<Vec<String>, FormError> {
    let genres: Vec<String> = genres
        .into_iter()
        .map(|g| g.trim().to_owned())
        .filter(|g| !g.is_empty())
        .collect();
    if genres.is_empty() {
        return Err(FormError::Missing("genres"));
    }
    Ok(genres)
}

fn id(value: Option<String>, field: &'static str) -> Result<i64, FormError> {
    required(value, field)?
        .trim()
        .parse()
        .map_err(|_| FormError::NotAnId(field))
}

const START_TIME_FORMATS: [&[BorrowedFormatItem<'static>]; 4] = [
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

/// Parses `YYYY-MM-DD HH:MM[:SS]`, with either a space or `T` before the time.
pub fn parse_start_time(raw: &str) -> Result<PrimitiveDateTime, FormError> {
    let raw = raw.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(raw, *format).ok())
        .ok_or_else(|| FormError::BadStartTime(raw.to_owned()))
}

impl VenueForm {
    pub fn validate(self) -> Result<NewVenue, FormError> {
        Ok(NewVenue {
            name: required(self.name, "name")?,
            city: required(self.city, "city")?,
            state: required(self.state, "state")?,
            address: required(self.address, "address")?,
            genres: required_genres(self.genres)?,
            phone: optional(self.phone),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            website: optional(self.website),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: optional(self.seeking_description),
        })
    }

    /// The submitted name, for messages about a submission that failed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).unwrap_or_default()
    }
}

impl ArtistForm {
    pub fn validate(self) -> Result<NewArtist, FormError> {
        Ok(NewArtist {
            name: required(self.name, "name")?,
            city: required(self.city, "city")?,
            state: required(self.state, "state")?,
            genres: required_genres(self.genres)?,
            phone: optional(self.phone),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            website: optional(self.website),
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: optional(self.seeking_description),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).unwrap_or_default()
    }
}

impl ShowForm {
    pub fn validate(self) -> Result<NewShow, FormError> {
        let artist_id = id(self.artist_id, "artist_id")?;
        let venue_id = id(self.venue_id, "venue_id")?;
        let start_time = parse_start_time(&required(self.start_time, "start_time")?)?;
        Ok(NewShow {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn musical_hop() -> VenueForm {
        VenueForm {
            name: Some("The Musical Hop".into()),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            address: Some("1015 Folsom Street".into()),
            phone: Some("123-123-1234".into()),
            genres: vec!["Jazz".into(), "Reggae".into()],
            seeking_talent: Some("y".into()),
            ..Default::default()
        }
    }

    #[test]
    fn venue_form_validates() {
        let venue = musical_hop().validate().unwrap();
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.genres, vec!["Jazz", "Reggae"]);
        assert!(venue.seeking_talent);
        assert_eq!(venue.website, "");
    }

    #[test]
    fn blank_required_field_is_missing() {
        let form = VenueForm {
            address: Some("   ".into()),
            ..musical_hop()
        };
        assert_eq!(form.validate(), Err(FormError::Missing("address")));
    }

    #[test]
    fn values_are_stored_as_submitted() {
        let form = VenueForm {
            name: Some(" The Musical Hop ".into()),
            phone: Some("123-123-1234 ".into()),
            ..musical_hop()
        };
        let venue = form.validate().unwrap();
        assert_eq!(venue.name, " The Musical Hop ");
        assert_eq!(venue.phone, "123-123-1234 ");
    }

    #[test]
    fn unchecked_checkbox_is_false() {
        let form = ArtistForm {
            name: Some("Guns N Petals".into()),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            genres: vec!["Rock n Roll".into()],
            ..Default::default()
        };
        assert!(!form.validate().unwrap().seeking_venue);
    }

    #[test]
    fn genres_are_required() {
        let form = ArtistForm {
            name: Some("Guns N Petals".into()),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            genres: vec!["".into()],
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::Missing("genres")));
    }

    #[test]
    fn start_time_formats() {
        let expected = datetime!(2035-04-01 20:00);
        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Ok(expected));
        assert_eq!(parse_start_time("2035-04-01 20:00"), Ok(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Ok(expected));
        assert_eq!(parse_start_time(" 2035-04-01T20:00:00 "), Ok(expected));
        assert!(matches!(
            parse_start_time("next tuesday"),
            Err(FormError::BadStartTime(_))
        ));
    }

    #[test]
    fn show_form_ids_must_be_numbers() {
        let form = ShowForm {
            artist_id: Some("four".into()),
            venue_id: Some("1".into()),
            start_time: Some("2035-04-01 20:00".into()),
        };
        assert_eq!(form.validate(), Err(FormError::NotAnId("artist_id")));
    }
}
