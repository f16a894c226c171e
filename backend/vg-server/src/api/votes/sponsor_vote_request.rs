use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorVoteRequest {
    /// Wallet that will sign the vote
    pub signer_address: Option<String>,
    /// Ticket object owned by the signer
    pub vote_ticket_id: Option<String>,
    pub candidate_id: Option<i64>,
    pub region_id: Option<i64>,
}
