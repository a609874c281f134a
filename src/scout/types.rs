use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One URL observed by a scan, as reported by Scout. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub redirect_target: Option<String>,
    #[serde(default)]
    pub is_external: Option<bool>,
}

impl LinkRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = Some(target.into());
        self
    }

    pub fn external(mut self, is_external: bool) -> Self {
        self.is_external = Some(is_external);
        self
    }
}

/// A content field that changed between two scans.
/// `old_value` and `new_value` are opaque and need not share a type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticChangeRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub old_value: Value,
    #[serde(default)]
    pub new_value: Value,
    /// Free-form; e.g. "minor", "relevant", "critical"
    #[serde(default)]
    pub impact_level: Option<String>,
}

/// Raw output of one Scout run, the input to [`crate::IngestAdapter::submit`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoutResults {
    /// Opaque tenant identifier (RUT or UUID)
    pub tenant_id: String,
    pub scout_id: String,
    pub domain: String,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub urls_new: Option<Vec<String>>,
    #[serde(default)]
    pub urls_removed: Option<Vec<String>>,
    #[serde(default)]
    pub semantic_changes: Option<Vec<SemanticChangeRecord>>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl ScoutResults {
    pub fn new(
        tenant_id: impl Into<String>,
        scout_id: impl Into<String>,
        domain: impl Into<String>,
        links: Vec<LinkRecord>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            scout_id: scout_id.into(),
            domain: domain.into(),
            links,
            ..Default::default()
        }
    }

    pub fn with_urls_new(mut self, urls: Vec<String>) -> Self {
        self.urls_new = Some(urls);
        self
    }

    pub fn with_urls_removed(mut self, urls: Vec<String>) -> Self {
        self.urls_removed = Some(urls);
        self
    }

    pub fn with_semantic_changes(mut self, changes: Vec<SemanticChangeRecord>) -> Self {
        self.semantic_changes = Some(changes);
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Link entry as the ingest endpoint expects it. All four keys always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: Option<String>,
    pub status_code: u16,
    pub redirect_target: Option<String>,
    pub is_external: bool,
}

/// Semantic change entry as the ingest endpoint expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticChange {
    pub url: Option<String>,
    pub field_name: Option<String>,
    pub old_value: Value,
    pub new_value: Value,
    pub impact_level: String,
}

/// Body POSTed to `/mcp/runtime/ingest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestPayload {
    pub tenant_id: String,
    pub scout_id: String,
    pub domain: String,
    pub links: Vec<Link>,
    pub urls_new: Vec<String>,
    pub urls_removed: Vec<String>,
    pub semantic_changes: Vec<SemanticChange>,
    pub metadata: Map<String, Value>,
}
