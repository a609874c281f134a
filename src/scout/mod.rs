pub mod types;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use types::{IngestPayload, Link, LinkRecord, ScoutResults, SemanticChange, SemanticChangeRecord};

pub const DEFAULT_STATUS_CODE: u16 = 200;
pub const DEFAULT_IMPACT_LEVEL: &str = "minor";
pub const ADAPTER_VERSION: &str = "1.0.0";

impl From<LinkRecord> for Link {
    fn from(record: LinkRecord) -> Self {
        Self {
            url: record.url,
            status_code: record.status_code.unwrap_or(DEFAULT_STATUS_CODE),
            redirect_target: record.redirect_target,
            is_external: record.is_external.unwrap_or(false),
        }
    }
}

impl From<SemanticChangeRecord> for SemanticChange {
    fn from(record: SemanticChangeRecord) -> Self {
        Self {
            url: record.url,
            field_name: record.field_name,
            old_value: record.old_value,
            new_value: record.new_value,
            impact_level: record
                .impact_level
                .unwrap_or_else(|| DEFAULT_IMPACT_LEVEL.to_string()),
        }
    }
}

/// Fill defaults into every link, keeping input order.
pub fn normalize_links(links: Vec<LinkRecord>) -> Vec<Link> {
    links.into_iter().map(Link::from).collect()
}

pub fn normalize_semantic_changes(changes: Vec<SemanticChangeRecord>) -> Vec<SemanticChange> {
    changes.into_iter().map(SemanticChange::from).collect()
}

/// Metadata attached when the caller supplies none.
pub fn default_metadata(now: DateTime<Utc>) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert(
        "timestamp".to_string(),
        Value::String(now.to_rfc3339_opts(SecondsFormat::Micros, true)),
    );
    metadata.insert(
        "adapter_version".to_string(),
        Value::String(ADAPTER_VERSION.to_string()),
    );
    metadata
}

impl IngestPayload {
    /// Build the payload, stamping default metadata with `now`.
    /// An empty metadata object is replaced just like a missing one.
    pub fn build(results: ScoutResults, now: DateTime<Utc>) -> Self {
        let metadata = match results.metadata {
            Some(m) if !m.is_empty() => m,
            _ => default_metadata(now),
        };

        Self {
            tenant_id: results.tenant_id,
            scout_id: results.scout_id,
            domain: results.domain,
            links: normalize_links(results.links),
            urls_new: results.urls_new.unwrap_or_default(),
            urls_removed: results.urls_removed.unwrap_or_default(),
            semantic_changes: normalize_semantic_changes(
                results.semantic_changes.unwrap_or_default(),
            ),
            metadata,
        }
    }
}
