//! Voting ticket issuance
//!
//! The local "already issued" check and the ledger submission are not
//! atomic. If the ledger confirms but the local write fails, the two stores
//! disagree and the issuance has to be reconciled by hand; the error log
//! carries the transaction digest for that.

use crate::{
    ApiError, ApiJson, ApiResult, AppState, AssignTicketRequest, AssignTicketResponse,
    SessionClaims,
};

use vg_core::WalletAddress;
use vg_db::{CitizenRepository, ElectionRepository, VoterHistoryRepository};
use vg_ledger::TicketIssuance;

use axum::{Json, extract::State};
use chrono::Utc;
use log::{error, info, warn};

const ALREADY_ISSUED: &str = "A voting ticket has already been issued for this election.";
const ELECTION_NOT_OPEN: &str = "This election is not open.";

/// POST /api/voter/assign-ticket
///
/// Mint a voting ticket for the session's citizen and record it
pub async fn assign_ticket(
    State(state): State<AppState>,
    session: SessionClaims,
    ApiJson(req): ApiJson<AssignTicketRequest>,
) -> ApiResult<Json<AssignTicketResponse>> {
    let citizen_id = session.citizen_id()?;

    let election_id = req
        .election_id
        .ok_or_else(|| ApiError::validation("electionId is required.", Some("electionId")))?;

    let citizen = CitizenRepository::new(state.pool.clone())
        .find_by_id(citizen_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User data not found."))?;

    let wallet_address = match req
        .target_wallet_address
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(raw) => WalletAddress::parse(raw).map_err(|_| {
            ApiError::validation("Invalid wallet address.", Some("targetWalletAddress"))
        })?,
        None => citizen.wallet_address.clone().ok_or_else(|| {
            ApiError::validation(
                "targetWalletAddress is required.",
                Some("targetWalletAddress"),
            )
        })?,
    };

    let election = ElectionRepository::new(state.pool.clone())
        .find_by_id(election_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Election {} not found", election_id)))?;

    if !election.is_open_at(Utc::now()) {
        warn!(
            "[TICKET] citizen {} asked for a ticket to closed election {}",
            citizen_id, election_id
        );
        return Err(ApiError::bad_request(ELECTION_NOT_OPEN));
    }

    let history = VoterHistoryRepository::new(state.pool.clone());
    if history.find(citizen_id, election_id).await?.is_some() {
        warn!(
            "[TICKET] duplicate request from citizen {} for election {}",
            citizen_id, election_id
        );
        return Err(ApiError::bad_request(ALREADY_ISSUED));
    }

    let ledger = state
        .ledger
        .as_ref()
        .ok_or_else(|| ApiError::external_service("Ledger is not configured."))?;

    let receipt = ledger
        .issue_ticket(TicketIssuance {
            recipient: wallet_address.clone(),
            election_id,
            election_object_id: election.ledger_object_id.clone(),
        })
        .await?;

    match history
        .record_issuance(citizen_id, election_id, &wallet_address, Some(&receipt.digest))
        .await
    {
        Ok(_) => {}
        Err(e) if e.is_unique_violation() => {
            warn!(
                "[TICKET] concurrent issuance for citizen {} election {}, ledger tx {} is extra",
                citizen_id, election_id, receipt.digest
            );
            return Err(ApiError::bad_request(ALREADY_ISSUED));
        }
        Err(e) => {
            error!(
                "[TICKET] ledger tx {} for citizen {} election {} was not recorded locally",
                receipt.digest, citizen_id, election_id
            );
            return Err(e.into());
        }
    }

    info!(
        "[TICKET] issued to citizen {} for election {} ({})",
        citizen_id, election_id, receipt.digest
    );

    Ok(Json(AssignTicketResponse {
        message: "Voting ticket issued.".to_string(),
        digest: receipt.digest,
        wallet_address: wallet_address.to_string(),
        election_id,
        fee_digest: receipt.fee_digest,
    }))
}
