use axum::response::Html;
use time::{PrimitiveDateTime, macros::format_description};

use crate::{forms::GENRES, models::{Summary, genres}, search::SearchResults};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Escapes text for use inside HTML element bodies and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body in the shared layout, draining pending flash messages into it.
pub fn layout(title: &str, flashes: &[String], body: &str) -> Html<String> {
    let flashes: String = flashes
        .iter()
        .map(|msg| {
            include_res!(str, "/pages/flash.html").replace("{message}", &escape(msg))
        })
        .collect();

    Html(
        include_res!(str, "/pages/layout.html")
            .replace("{title}", &escape(title))
            .replace("{flashes}", &flashes)
            .replace("{body}", body),
    )
}

pub fn checked(flag: bool) -> &'static str {
    if flag { "checked" } else { "" }
}

/// `<li>` links to `{base}/{id}` for each record.
pub fn list_items(base: &str, items: &[Summary]) -> String {
    items
        .iter()
        .map(|Summary { id, name }| {
            include_res!(str, "/pages/list_item.html")
                .replace("{href}", &format!("{base}/{id}"))
                .replace("{name}", &escape(name))
        })
        .collect()
}

pub fn genre_tags(stored: &str) -> String {
    genres::split(stored)
        .iter()
        .map(|genre| include_res!(str, "/pages/genre.html").replace("{genre}", &escape(genre)))
        .collect()
}

/// Options for the genres multi-select. Stored genres outside the known list are kept.
pub fn genre_options(stored: &str) -> String {
    let selected = genres::split(stored);
    let mut options: Vec<&str> = GENRES.to_vec();
    options.extend(
        selected
            .iter()
            .map(String::as_str)
            .filter(|g| !GENRES.contains(g)),
    );

    options
        .into_iter()
        .map(|genre| {
            let is_selected = selected.iter().any(|s| s == genre);
            include_res!(str, "/pages/option.html")
                .replace("{selected}", if is_selected { "selected" } else { "" })
                .replace("{value}", &escape(genre))
        })
        .collect()
}

pub fn show_card(href: &str, image_link: &str, name: &str, start_time: PrimitiveDateTime) -> String {
    include_res!(str, "/pages/shows/show_card.html")
        .replace("{href}", href)
        .replace("{image_link}", &escape(image_link))
        .replace("{name}", &escape(name))
        .replace("{start_time}", &format_datetime(start_time, DateStyle::Full))
}

pub fn search_forms(action: &str) -> String {
    include_res!(str, "/pages/search_forms.html").replace("{action}", action)
}

pub fn search_results(base: &str, label: &str, results: &SearchResults) -> String {
    include_res!(str, "/pages/search_results.html")
        .replace("{search_term}", &escape(label))
        .replace("{count}", &results.count.to_string())
        .replace("{items}", &list_items(base, &results.data))
}

#[derive(Debug, Clone, Copy)]
pub enum DateStyle {
    Medium,
    Full,
}

/// `Medium`: `Tue 05/21/2019 9:30PM`, `Full`: `Tuesday May 21, 2019 at 9:30PM`.
pub fn format_datetime(dt: PrimitiveDateTime, style: DateStyle) -> String {
    let formatted = match style {
        DateStyle::Medium => dt.format(format_description!(
            "[weekday repr:short] [month]/[day]/[year] [hour repr:12 padding:none]:[minute][period]"
        )),
        DateStyle::Full => dt.format(format_description!(
            "[weekday] [month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
        )),
    };
    formatted.unwrap_or_else(|_| dt.to_string())
}
