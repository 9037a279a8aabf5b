//! Fetch Jikan search results for a query and print the derived note fields
//! for the first candidate.
//! Usage:
//!   cargo run --bin jikan_props -- <query...>

use anyhow::{anyhow, Result};
use manganote::jikan::{JikanApi, JikanClient};
use manganote::note::{build_output_fields, format_label, FieldOptions};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let query = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        return Err(anyhow!("Usage: jikan_props <query...>"));
    }

    let client = JikanClient::new()?;
    let results = client.search_manga(&query).await?;
    if results.is_empty() {
        return Err(anyhow!("No Jikan results for '{}'", query));
    }

    println!("Candidates:");
    for manga in &results {
        println!("  {}", format_label(manga));
    }

    let fields = build_output_fields(&results[0], &FieldOptions::default())?;
    println!("\nDerived fields for {}:", format_label(&results[0]));
    for (key, value) in &fields {
        println!("  {key} = {value}");
    }
    Ok(())
}
