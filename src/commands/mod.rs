mod preview;
mod send;

pub use preview::preview;
pub use send::send;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use scout_ingest::ScoutResults;

/// Load scout results from a JSON file, or stdin when `path` is `-`.
fn read_results(path: &Path) -> Result<ScoutResults> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).context("Failed to parse scout results JSON")
}
