use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use scout_ingest::IngestAdapter;

/// Submit a scout results file and print the endpoint's response.
pub async fn send(adapter: &IngestAdapter, file: &Path) -> Result<()> {
    let results = super::read_results(file)?;

    info!(
        tenant_id = %results.tenant_id,
        scout_id = %results.scout_id,
        domain = %results.domain,
        links = results.links.len(),
        url = adapter.ingest_url(),
        "Sending scout results"
    );

    let response = adapter
        .submit(results)
        .await
        .context("Ingest submission failed")?;

    info!("Scout results accepted");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
