use vg_core::VoterHistory;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One issued voting ticket, as listed on the profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub election_id: i64,
    pub wallet_address: String,
    pub tx_digest: Option<String>,
    pub issued_at: DateTime<Utc>,
}

impl From<VoterHistory> for TicketDto {
    fn from(h: VoterHistory) -> Self {
        Self {
            election_id: h.election_id,
            wallet_address: h.wallet_address,
            tx_digest: h.tx_digest,
            issued_at: h.issued_at,
        }
    }
}
