use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local record of a ticket issued to a citizen for one election.
///
/// At most one row exists per (citizen, election).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterHistory {
    pub id: i64,
    pub citizen_id: i64,
    pub election_id: i64,
    pub wallet_address: String,
    pub tx_digest: Option<String>,
    pub issued_at: DateTime<Utc>,
}
