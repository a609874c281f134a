/// Environment variable holding the default ingest base URL.
pub const BASE_URL_ENV: &str = "MCP_API_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.smarterbot.cl";
pub const INGEST_PATH: &str = "/mcp/runtime/ingest";

/// Resolved endpoint configuration. Fixed for the lifetime of an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    base_url: String,
    ingest_url: String,
}

impl AdapterConfig {
    /// Resolve from an explicit URL, falling back to `MCP_API_URL` and then
    /// to [`DEFAULT_BASE_URL`].
    pub fn resolve(explicit: Option<&str>) -> Self {
        let env_value = dotenv::var(BASE_URL_ENV).ok();
        Self::with_base_url(resolve_base_url(explicit, env_value.as_deref()))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let ingest_url = format!("{}{}", base_url.trim_end_matches('/'), INGEST_PATH);
        Self {
            base_url,
            ingest_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ingest_url(&self) -> &str {
        &self.ingest_url
    }
}

/// Three-tier lookup: explicit value, then environment, then the hardcoded default.
/// Empty strings count as unset.
pub fn resolve_base_url(explicit: Option<&str>, env_value: Option<&str>) -> String {
    explicit
        .filter(|s| !s.is_empty())
        .or_else(|| env_value.filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}
