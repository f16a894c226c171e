use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketRequest {
    /// Wallet to receive the ticket; defaults to the citizen's own
    pub target_wallet_address: Option<String>,
    pub election_id: Option<i64>,
}
