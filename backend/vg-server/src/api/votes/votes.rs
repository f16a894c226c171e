use crate::{
    ApiError, ApiJson, ApiResult, AppState, SessionClaims, SponsorVoteRequest,
    SponsorVoteResponse,
};

use vg_core::WalletAddress;
use vg_core::models::wallet_address::parse_object_id;
use vg_db::{CandidateRepository, RegionRepository};
use vg_ledger::VoteDraft;

use axum::{Json, extract::State};
use log::info;

/// POST /api/vote/sponsor
///
/// Build a vote transaction for the citizen's wallet with the server paying
/// gas, and co-sign it as sponsor. Nothing is stored or submitted.
pub async fn sponsor_vote(
    State(state): State<AppState>,
    session: SessionClaims,
    ApiJson(req): ApiJson<SponsorVoteRequest>,
) -> ApiResult<Json<SponsorVoteResponse>> {
    let citizen_id = session.citizen_id()?;

    let signer = req
        .signer_address
        .as_deref()
        .ok_or_else(|| ApiError::validation("signerAddress is required.", Some("signerAddress")))?;
    let sender = WalletAddress::parse(signer)
        .map_err(|_| ApiError::validation("Invalid signer address.", Some("signerAddress")))?;

    let ticket_id = req
        .vote_ticket_id
        .as_deref()
        .ok_or_else(|| ApiError::validation("voteTicketId is required.", Some("voteTicketId")))?;
    let ticket_id = parse_object_id("voteTicketId", ticket_id)?;

    let candidate_id = req
        .candidate_id
        .ok_or_else(|| ApiError::validation("candidateId is required.", Some("candidateId")))?;
    let region_id = req
        .region_id
        .ok_or_else(|| ApiError::validation("regionId is required.", Some("regionId")))?;

    let candidate = CandidateRepository::new(state.pool.clone())
        .find_by_id(candidate_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Candidate {} not found", candidate_id)))?;

    let region = RegionRepository::new(state.pool.clone())
        .find_by_id(region_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Region {} not found", region_id)))?;

    let ledger = state
        .ledger
        .as_ref()
        .ok_or_else(|| ApiError::external_service("Ledger is not configured."))?;

    let sponsored = ledger
        .prepare_vote(VoteDraft {
            sender,
            ticket_id,
            candidate_object_id: candidate.ledger_object_id,
            region_object_id: region.ledger_object_id,
        })
        .await?;

    info!(
        "[VOTE] sponsored vote transaction for citizen {} (candidate {}, region {})",
        citizen_id, candidate_id, region_id
    );

    Ok(Json(SponsorVoteResponse {
        tx_bytes: sponsored.tx_bytes,
        sponsor_signature: sponsored.sponsor_signature,
        gas_budget: sponsored.gas_budget,
        sender: sponsored.sender.to_string(),
        gas_owner: sponsored.gas_owner.to_string(),
    }))
}
