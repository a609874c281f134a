use std::path::Path;

use anyhow::Result;

use scout_ingest::IngestAdapter;

pub fn preview(adapter: &IngestAdapter, file: &Path) -> Result<()> {
    let payload = adapter.prepare(super::read_results(file)?);
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
