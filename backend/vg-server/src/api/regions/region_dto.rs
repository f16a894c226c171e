use vg_core::Region;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: i64,
    pub name: String,
    pub ledger_object_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Region> for RegionDto {
    fn from(r: Region) -> Self {
        Self {
            id: r.id,
            name: r.name,
            ledger_object_id: r.ledger_object_id,
            created_at: r.created_at,
        }
    }
}
