use serde::Serialize;

/// Vote transaction sponsored by the server
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorVoteResponse {
    /// Base64 transaction bytes with the server as gas owner
    pub tx_bytes: String,
    /// Sponsor signature to submit alongside the citizen's own
    pub sponsor_signature: String,
    pub gas_budget: u64,
    pub sender: String,
    pub gas_owner: String,
}
