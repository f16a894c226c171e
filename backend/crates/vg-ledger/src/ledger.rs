use crate::LedgerErrorResult;

use vg_core::WalletAddress;

use async_trait::async_trait;

/// A ticket to mint for one citizen in one election
#[derive(Debug, Clone)]
pub struct TicketIssuance {
    pub recipient: WalletAddress,
    pub election_id: i64,
    /// On-ledger election object, when the election has one
    pub election_object_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReceipt {
    /// Digest of the issuance transaction
    pub digest: String,
    /// Digest of the fee allowance transfer, if one was sent
    pub fee_digest: Option<String>,
}

/// Inputs for a sponsored vote transaction
#[derive(Debug, Clone)]
pub struct VoteDraft {
    pub sender: WalletAddress,
    pub ticket_id: String,
    pub candidate_object_id: String,
    pub region_object_id: String,
}

/// Vote transaction with gas paid and co-signed by the sponsor.
///
/// The citizen adds their own signature and submits both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsoredTransaction {
    /// Base64 BCS `TransactionData`
    pub tx_bytes: String,
    /// Serialized sponsor signature over `tx_bytes`
    pub sponsor_signature: String,
    pub gas_budget: u64,
    pub sender: WalletAddress,
    pub gas_owner: WalletAddress,
}

/// External ledger holding tickets and votes.
///
/// Every call is a single attempt. Callers decide what a failure means.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Mint a voting ticket to the recipient, signed by the server's admin key
    async fn issue_ticket(&self, issuance: TicketIssuance) -> LedgerErrorResult<TicketReceipt>;

    /// Build a vote transaction with the admin as gas owner and sign it as
    /// sponsor. Nothing is submitted.
    async fn prepare_vote(&self, draft: VoteDraft) -> LedgerErrorResult<SponsoredTransaction>;
}
