use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketResponse {
    pub message: String,
    /// Digest of the issuance transaction
    pub digest: String,
    pub wallet_address: String,
    pub election_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_digest: Option<String>,
}
