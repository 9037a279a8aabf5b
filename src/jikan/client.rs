use anyhow::{anyhow, Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

const JIKAN_ENDPOINT: &str = "https://api.jikan.moe/v4/manga";
const SEARCH_LIMIT: &str = "10";

#[derive(Debug, Clone)]
pub struct JikanClient {
    client: Client,
}

/// One manga record from the Jikan `data` array. Every field the API can
/// omit or null is optional; anything unmodeled is kept in `extra` so the
/// raw record can be spread into the note variables verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manga {
    pub mal_id: Option<i64>,
    pub url: Option<String>,
    pub images: Option<Images>,
    pub title: Option<String>,
    pub title_japanese: Option<String>,
    pub titles: Vec<AltTitle>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub chapters: Option<i64>,
    pub volumes: Option<i64>,
    // Kept as a raw value: a score of 0 is valid and must not be
    // conflated with null or an empty string.
    pub score: Option<Value>,
    pub synopsis: Option<String>,
    pub authors: Vec<Named>,
    pub genres: Vec<Named>,
    pub themes: Vec<Named>,
    pub published: Option<DateRange>,
    pub aired: Option<DateRange>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Named {
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AltTitle {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub jpg: Option<ImageSet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub from: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JikanClient {
    pub fn new() -> Result<Self> {
        let user_agent = format!("manganote/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .context("Failed to build Jikan HTTP client")?;
        Ok(Self { client })
    }

    pub(crate) async fn search(&self, query: &str) -> Result<Vec<Manga>> {
        #[derive(Deserialize)]
        struct SearchResponse {
            data: Option<Vec<Manga>>,
        }

        debug!("Searching Jikan for '{}'", query);
        let res = self
            .client
            .get(JIKAN_ENDPOINT)
            .query(&[("q", query), ("limit", SEARCH_LIMIT)])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .context("Jikan search request failed")?;

        let status = res.status();
        let bytes = res
            .bytes()
            .await
            .context("Failed to read Jikan search body")?;
        if !status.is_success() {
            return Err(anyhow!(
                "Jikan search HTTP error (status {}): {}",
                status,
                String::from_utf8_lossy(&bytes)
            ));
        }

        let parsed: SearchResponse =
            serde_json::from_slice(&bytes).context("Failed to parse Jikan search JSON")?;
        Ok(parsed.data.unwrap_or_default())
    }
}
