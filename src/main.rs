use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use manganote::app;
use manganote::host::TerminalHost;
use manganote::jikan::JikanClient;
use manganote::note::FieldOptions;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn field_options_from_env() -> FieldOptions {
    let include_fixed_status = match env::var("MANGANOTE_FIXED_STATUS") {
        Ok(v) => !(v == "0" || v.eq_ignore_ascii_case("false")),
        Err(_) => true,
    };
    FieldOptions {
        include_fixed_status,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    match dotenv() {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(e) => debug!("No .env file loaded ({}) - relying on environment", e),
    }

    let options = field_options_from_env();
    let jikan = JikanClient::new()?;
    let host = TerminalHost;

    let fields = app::run(&host, &jikan, &options).await?;
    info!("Prepared {} note variables", fields.len());
    Ok(())
}
