use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::{Map, Value};

use crate::jikan::Manga;

mod text;

use text::{
    fix_authors, join_names, quote_yaml, reformat_summary, sanitize_filename, yaml_name_list,
    yaml_title_list,
};

/// Flat variable mapping handed to the note-template renderer.
pub type OutputFields = Map<String, Value>;

pub const FIXED_STATUS: &str = "Planning";

const UNKNOWN_TITLE: &str = "Unknown Title";

#[derive(Debug, Clone)]
pub struct FieldOptions {
    pub include_fixed_status: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            include_fixed_status: true,
        }
    }
}

pub fn format_label(manga: &Manga) -> String {
    let media_type = manga.media_type.as_deref().unwrap_or("?");
    let title = manga.title.as_deref().unwrap_or(UNKNOWN_TITLE);
    format!("({media_type}) {title}")
}

/// Spread the raw record into the mapping, then derive the template fields.
/// Every derived value is a defined scalar or "N/A"; a record with missing or
/// malformed fields still produces a complete mapping.
pub fn build_output_fields(manga: &Manga, options: &FieldOptions) -> Result<OutputFields> {
    let mut fields = match serde_json::to_value(manga)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let safe_title = manga.title.as_deref().unwrap_or(UNKNOWN_TITLE);
    let year = extract_year(manga);
    let year_label = year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let file_name = format!("{safe_title} ({year_label})");
    let authors_original = join_names(&manga.authors);

    let cover = manga
        .images
        .as_ref()
        .and_then(|i| i.jpg.as_ref())
        .and_then(|j| j.image_url.as_deref())
        .unwrap_or("N/A");

    fields.insert(
        "authorsReversed".to_string(),
        Value::from(fix_authors(&manga.authors)),
    );
    fields.insert(
        "genreList".to_string(),
        Value::from(yaml_name_list(&manga.genres)),
    );
    fields.insert(
        "authorsOriginal".to_string(),
        Value::from(quote_yaml(Some(authors_original.as_str()))),
    );
    fields.insert(
        "themesList".to_string(),
        Value::from(yaml_name_list(&manga.themes)),
    );
    fields.insert("cover".to_string(), Value::from(cover));
    fields.insert(
        "fileName".to_string(),
        Value::from(sanitize_filename(Some(file_name.as_str()))),
    );
    fields.insert("title".to_string(), Value::from(quote_yaml(Some(safe_title))));
    fields.insert(
        "japaneseTitle".to_string(),
        Value::from(quote_yaml(manga.title_japanese.as_deref())),
    );
    fields.insert(
        "alternateTitles".to_string(),
        Value::from(yaml_title_list(&manga.titles)),
    );
    fields.insert(
        "summary".to_string(),
        Value::from(reformat_summary(manga.synopsis.as_deref())),
    );
    fields.insert(
        "chapterNumber".to_string(),
        manga.chapters.map(Value::from).unwrap_or_else(|| Value::from("0")),
    );
    fields.insert(
        "volumeNumber".to_string(),
        manga.volumes.map(Value::from).unwrap_or_else(|| Value::from("0")),
    );
    fields.insert(
        "malURL".to_string(),
        Value::from(quote_yaml(manga.url.as_deref())),
    );
    fields.insert(
        "year".to_string(),
        year.map(Value::from).unwrap_or_else(|| Value::from("N/A")),
    );
    fields.insert(
        "onlineRating".to_string(),
        score_value(manga.score.as_ref()),
    );
    if options.include_fixed_status {
        fields.insert("mangastatus".to_string(), Value::from(FIXED_STATUS));
    }

    Ok(fields)
}

/// Publication year, preferring `published.from` over `aired.from`.
fn extract_year(manga: &Manga) -> Option<i32> {
    let date = manga
        .published
        .as_ref()
        .and_then(|d| d.from.as_deref())
        .or_else(|| manga.aired.as_ref().and_then(|d| d.from.as_deref()))?;
    parse_year(date)
}

fn parse_year(date: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.year());
    }
    NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// A score of 0 is a real score; only null, absent, or the empty string
/// degrade to "N/A".
fn score_value(score: Option<&Value>) -> Value {
    match score {
        None | Some(Value::Null) => Value::from("N/A"),
        Some(Value::String(s)) if s.is_empty() => Value::from("N/A"),
        Some(v) => v.clone(),
    }
}
