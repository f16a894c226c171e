//! Election handlers

use crate::{
    AdminGuard, ApiJson, ApiResult, AppState, CreateElectionRequest, ElectionDto,
    ElectionListResponse,
};

use vg_core::NewElection;
use vg_core::models::wallet_address::parse_object_id;
use vg_db::ElectionRepository;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use log::info;

/// POST /api/admin/elections
pub async fn create_election(
    _admin: AdminGuard,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateElectionRequest>,
) -> ApiResult<(StatusCode, Json<ElectionDto>)> {
    let ledger_object_id = req
        .ledger_object_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .map(|id| parse_object_id("ledgerObjectId", id))
        .transpose()?;

    let new_election = NewElection {
        name: req.name.trim().to_string(),
        description: req.description,
        starts_at: req.starts_at,
        ends_at: req.ends_at,
        ledger_object_id,
        is_active: req.is_active,
    };
    new_election.validate()?;

    let election = ElectionRepository::new(state.pool.clone())
        .create(&new_election)
        .await?;

    info!("[ADMIN] election {} created: {}", election.id, election.name);

    Ok((StatusCode::CREATED, Json(election.into())))
}

/// GET /api/admin/elections
///
/// Every election, open or not
pub async fn list_elections(
    _admin: AdminGuard,
    State(state): State<AppState>,
) -> ApiResult<Json<ElectionListResponse>> {
    let elections = ElectionRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(ElectionListResponse {
        elections: elections.into_iter().map(ElectionDto::from).collect(),
    }))
}

/// GET /api/elections
///
/// Active elections whose voting period includes now
pub async fn list_open_elections(
    State(state): State<AppState>,
) -> ApiResult<Json<ElectionListResponse>> {
    let elections = ElectionRepository::new(state.pool.clone())
        .find_open(Utc::now())
        .await?;

    Ok(Json(ElectionListResponse {
        elections: elections.into_iter().map(ElectionDto::from).collect(),
    }))
}
