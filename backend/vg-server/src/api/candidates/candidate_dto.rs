use vg_core::Candidate;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDto {
    pub id: i64,
    pub name: String,
    pub party: Option<String>,
    pub region_id: Option<i64>,
    pub ledger_object_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Candidate> for CandidateDto {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id,
            name: c.name,
            party: c.party,
            region_id: c.region_id,
            ledger_object_id: c.ledger_object_id,
            created_at: c.created_at,
        }
    }
}
