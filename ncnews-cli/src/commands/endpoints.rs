//! Print the `/api` endpoint description document

use anyhow::{Context, Result};
use ncnews_server::http::routes::api::endpoints;

pub fn run_endpoints() -> Result<()> {
    let doc = serde_json::to_string_pretty(endpoints()).context("Failed to render endpoints")?;
    println!("{}", doc);
    Ok(())
}
