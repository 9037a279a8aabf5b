use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::host::NoteHost;
use crate::jikan::JikanApi;
use crate::note::{build_output_fields, format_label, FieldOptions, OutputFields};

const NOTICE_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No query entered.")]
    EmptyQuery,
    #[error("No results found.")]
    NoResults,
    #[error("No choice selected.")]
    NoSelection,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Run the prompt -> search -> pick -> transform -> assign pipeline once.
/// Each taxonomy failure emits a transient notice and aborts without
/// assigning anything.
pub async fn run(
    host: &dyn NoteHost,
    api: &dyn JikanApi,
    options: &FieldOptions,
) -> Result<OutputFields, PipelineError> {
    let query = match host.input_prompt("Enter manga name:").await? {
        Some(q) if !q.trim().is_empty() => q.trim().to_string(),
        _ => {
            host.notice("No query entered.", NOTICE_DURATION).await;
            return Err(PipelineError::EmptyQuery);
        }
    };

    let results = api.search_manga(&query).await?;
    info!("Jikan search for '{}' returned {} results", query, results.len());
    if results.is_empty() {
        host.notice("No results found.", NOTICE_DURATION).await;
        return Err(PipelineError::NoResults);
    }

    let labels: Vec<String> = results.iter().map(format_label).collect();
    let choice = match host.pick(&labels).await? {
        Some(index) => results.get(index),
        None => None,
    };
    let Some(choice) = choice else {
        host.notice("No choice selected.", NOTICE_DURATION).await;
        return Err(PipelineError::NoSelection);
    };

    let fields = build_output_fields(choice, options)?;
    host.assign_variables(&fields).await?;
    Ok(fields)
}
