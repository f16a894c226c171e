use vg_core::Election;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub ledger_object_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Election> for ElectionDto {
    fn from(e: Election) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            starts_at: e.starts_at,
            ends_at: e.ends_at,
            ledger_object_id: e.ledger_object_id,
            is_active: e.is_active,
            created_at: e.created_at,
        }
    }
}
