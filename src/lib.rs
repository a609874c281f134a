//! Adapter that reshapes Scout scan results into the runtime ingest payload
//! and delivers it to `{base_url}/mcp/runtime/ingest`.

pub mod adapter;
pub mod config;
pub mod error;
pub mod scout;

pub use adapter::IngestAdapter;
pub use config::AdapterConfig;
pub use error::{IngestError, Result};
pub use scout::types::{
    IngestPayload, Link, LinkRecord, ScoutResults, SemanticChange, SemanticChangeRecord,
};
