use anyhow::Result;
use async_trait::async_trait;

mod client;

pub use client::{AltTitle, DateRange, ImageSet, Images, JikanClient, Manga, Named};

#[async_trait]
pub trait JikanApi: Send + Sync {
    async fn search_manga(&self, query: &str) -> Result<Vec<Manga>>;
}

#[async_trait]
impl JikanApi for JikanClient {
    async fn search_manga(&self, query: &str) -> Result<Vec<Manga>> {
        self.search(query).await
    }
}
