use sqlx::{FromRow, SqlitePool};

use crate::{forms::SearchForm, models::Summary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Case-insensitive substring of the name.
    Name(String),
    /// Exact city and state.
    Location { city: String, state: String },
}

impl SearchQuery {
    /// A non-blank search term wins over city and state. A submitted location form searches
    /// even when left empty. `None` when the form asks for nothing.
    pub fn from_form(form: SearchForm) -> Option<Self> {
        if let Some(term) = form.search_term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            return Some(SearchQuery::Name(term.to_owned()));
        }

        if form.city.is_none() && form.state.is_none() {
            return None;
        }
        Some(SearchQuery::Location {
            city: form.city.unwrap_or_default().trim().to_owned(),
            state: form.state.unwrap_or_default().trim().to_owned(),
        })
    }

    /// What the results page says was searched for.
    pub fn label(&self) -> String {
        match self {
            SearchQuery::Name(term) => term.clone(),
            SearchQuery::Location { city, state } => format!("{city} {state}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

pub async fn search_venues(db_pool: &SqlitePool, query: &SearchQuery) -> sqlx::Result<SearchResults> {
    search(db_pool, "venue", query).await
}

pub async fn search_artists(db_pool: &SqlitePool, query: &SearchQuery) -> sqlx::Result<SearchResults> {
    search(db_pool, "artist", query).await
}

async fn search(db_pool: &SqlitePool, table: &'static str, query: &SearchQuery) -> sqlx::Result<SearchResults> {
    let data: Vec<Summary> = match query {
        SearchQuery::Name(term) => {
            let sql = format!("SELECT id,name FROM {table} ORDER BY id");
            let names: Vec<Summary> = sqlx::query_as(&sql).fetch_all(db_pool).await?;
            let term = term.to_lowercase();
            names
                .into_iter()
                .filter(|summary| name_matches(&summary.name, &term))
                .collect()
        }
        SearchQuery::Location { city, state } => {
            let sql = format!("SELECT id,name FROM {table} WHERE city=? AND state=? ORDER BY id");
            sqlx::query_as(&sql)
                .bind(city)
                .bind(state)
                .fetch_all(db_pool)
                .await?
        }
    };

    tracing::debug!(table, ?query, hits = data.len(), "search");
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Substring match ignoring case in any script. `term` must already be lowercase.
fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(term)
}

#[derive(Debug, Clone, FromRow)]
pub struct AreaVenue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
}

/// Venues sharing a city and state.
#[derive(Debug, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Groups venues by (city, state), ordered by state then city. Venues keep their input order.
pub fn group_by_area(mut rows: Vec<AreaVenue>) -> Vec<Area> {
    rows.sort_by(|a, b| (&a.state, &a.city).cmp(&(&b.state, &b.city)));

    let mut areas: Vec<Area> = Vec::new();
    for AreaVenue { id, name, city, state } in rows {
        match areas.last_mut() {
            Some(area) if area.city == city && area.state == state => {
                area.venues.push(Summary { id, name });
            }
            _ => areas.push(Area {
                city,
                state,
                venues: vec![Summary { id, name }],
            }),
        }
    }
    areas
}

pub async fn venue_areas(db_pool: &SqlitePool) -> sqlx::Result<Vec<Area>> {
    let rows: Vec<AreaVenue> = sqlx::query_as("SELECT id,name,city,state FROM venue ORDER BY state, city, id")
        .fetch_all(db_pool)
        .await?;
    Ok(group_by_area(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: i64, name: &str, city: &str, state: &str) -> AreaVenue {
        AreaVenue {
            id,
            name: name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    #[test]
    fn search_term_wins_over_location() {
        let form = SearchForm {
            search_term: Some(" hop ".into()),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
        };
        assert_eq!(SearchQuery::from_form(form), Some(SearchQuery::Name("hop".into())));
    }

    #[test]
    fn blank_term_falls_through_to_location() {
        let form = SearchForm {
            search_term: Some("".into()),
            city: Some("New York".into()),
            state: None,
        };
        let query = SearchQuery::from_form(form).unwrap();
        assert_eq!(
            query,
            SearchQuery::Location {
                city: "New York".into(),
                state: "".into()
            }
        );
        assert_eq!(query.label(), "New York ");
    }

    #[test]
    fn empty_form_searches_nothing() {
        assert_eq!(SearchQuery::from_form(SearchForm::default()), None);
    }

    #[test]
    fn name_match_folds_any_case() {
        assert!(name_matches("École Café", "école"));
        assert!(name_matches("The Musical Hop", "hop"));
        assert!(name_matches("100% Sure_Thing", "100% sure_"));
        assert!(!name_matches("The Musical Hop", "pianos"));
    }

    #[test]
    fn empty_location_form_still_searches() {
        let form = SearchForm {
            search_term: None,
            city: Some("".into()),
            state: Some("".into()),
        };
        assert_eq!(
            SearchQuery::from_form(form),
            Some(SearchQuery::Location {
                city: "".into(),
                state: "".into()
            })
        );
    }

    #[test]
    fn areas_sorted_by_state_then_city() {
        let areas = group_by_area(vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue(4, "The Lot", "Los Angeles", "CA"),
        ]);

        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("Los Angeles", "CA"), ("San Francisco", "CA"), ("New York", "NY")]
        );

        let ids: Vec<i64> = areas[1].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
