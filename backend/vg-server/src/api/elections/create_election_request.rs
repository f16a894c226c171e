use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateElectionRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339
    pub starts_at: DateTime<Utc>,
    /// RFC 3339, after `starts_at`
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub ledger_object_id: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
