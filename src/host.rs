use anyhow::{Context, Result};
use async_trait::async_trait;
use inquire::error::InquireError;
use serde_json::Value;
use std::io::Write;
use std::time::Duration;

use crate::note::OutputFields;

/// The host surface the pipeline runs against: a text prompt, a list picker,
/// a transient notice channel, and the variables sink the template renderer
/// reads from. `None` from a prompt means the user backed out.
#[async_trait]
pub trait NoteHost: Send + Sync {
    async fn input_prompt(&self, prompt: &str) -> Result<Option<String>>;
    async fn pick(&self, labels: &[String]) -> Result<Option<usize>>;
    async fn notice(&self, message: &str, duration: Duration);
    async fn assign_variables(&self, fields: &OutputFields) -> Result<()>;
}

/// Interactive terminal host. Variables are rendered as `key: value` lines on
/// stdout for the downstream template; notices go to stderr.
pub struct TerminalHost;

#[async_trait]
impl NoteHost for TerminalHost {
    async fn input_prompt(&self, prompt: &str) -> Result<Option<String>> {
        match inquire::Text::new(prompt).prompt() {
            Ok(text) => Ok(Some(text)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e).context("Text prompt failed"),
        }
    }

    async fn pick(&self, labels: &[String]) -> Result<Option<usize>> {
        match inquire::Select::new("Select a result:", labels.to_vec()).raw_prompt() {
            Ok(choice) => Ok(Some(choice.index)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e).context("Selection prompt failed"),
        }
    }

    async fn notice(&self, message: &str, _duration: Duration) {
        eprintln!("{message}");
    }

    async fn assign_variables(&self, fields: &OutputFields) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for (key, value) in fields {
            match value {
                Value::String(s) => writeln!(out, "{key}: {s}")?,
                other => writeln!(out, "{key}: {other}")?,
            }
        }
        Ok(())
    }
}
