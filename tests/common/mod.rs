#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use sqlx::{FromRow, SqlitePool};
use time::PrimitiveDateTime;
use venuebook::{
    AppState, db,
    models::{NewArtist, NewVenue},
};

pub async fn test_app() -> (Router, SqlitePool) {
    let db_pool = db::connect_in_memory().await.unwrap();
    let app = venuebook::app(
        AppState {
            db_pool: db_pool.clone(),
        },
        time::Duration::minutes(5),
    );
    (app, db_pool)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without location")
        .to_str()
        .unwrap()
}

/// `name=value` of the session cookie set by `response`.
pub fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("no session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_owned()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        address: "1015 Folsom Street".to_owned(),
        phone: "123-123-1234".to_owned(),
        image_link: "https://example.com/venue.jpg".to_owned(),
        facebook_link: "https://www.facebook.com/venue".to_owned(),
        website: "https://example.com".to_owned(),
        genres: vec!["Jazz".to_owned(), "Reggae".to_owned()],
        seeking_talent: true,
        seeking_description: "We are on the lookout for a local artist".to_owned(),
    }
}

pub fn artist(name: &str, city: &str, state: &str) -> NewArtist {
    NewArtist {
        name: name.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        phone: "326-123-5000".to_owned(),
        image_link: "https://example.com/artist.jpg".to_owned(),
        facebook_link: "https://www.facebook.com/artist".to_owned(),
        website: "https://example.com/artist".to_owned(),
        genres: vec!["Rock n Roll".to_owned()],
        seeking_venue: false,
        seeking_description: String::new(),
    }
}

pub async fn insert_venue(db_pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
    venuebook::venues::store::insert(db_pool, &venue(name, city, state))
        .await
        .unwrap()
}

pub async fn insert_artist(db_pool: &SqlitePool, name: &str) -> i64 {
    venuebook::artists::store::insert(db_pool, &artist(name, "San Francisco", "CA"))
        .await
        .unwrap()
}

/// A stored show row, read straight from the table.
#[derive(Debug, FromRow)]
pub struct StoredShow {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: PrimitiveDateTime,
}

pub async fn shows_at_venue(db_pool: &SqlitePool, venue_id: i64) -> Vec<StoredShow> {
    sqlx::query_as("SELECT * FROM show WHERE venue_id=? ORDER BY start_time")
        .bind(venue_id)
        .fetch_all(db_pool)
        .await
        .unwrap()
}

pub async fn shows_by_artist(db_pool: &SqlitePool, artist_id: i64) -> Vec<StoredShow> {
    sqlx::query_as("SELECT * FROM show WHERE artist_id=? ORDER BY start_time")
        .bind(artist_id)
        .fetch_all(db_pool)
        .await
        .unwrap()
}

/// Makes every `op` (INSERT, UPDATE or DELETE) on `table` fail, standing in for a broken database.
pub async fn fail_writes(db_pool: &SqlitePool, table: &str, op: &str) {
    let sql = format!(
        "CREATE TRIGGER fail_{op}_{table} BEFORE {op} ON {table} \
         BEGIN SELECT RAISE(ABORT, 'disk I/O error'); END"
    );
    sqlx::query(&sql).execute(db_pool).await.unwrap();
}

pub async fn count(db_pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(db_pool)
        .await
        .unwrap()
}
