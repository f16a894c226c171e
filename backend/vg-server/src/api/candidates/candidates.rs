//! Candidate handlers

use crate::{
    AdminGuard, ApiError, ApiJson, ApiResult, AppState, CandidateDto, CandidateListResponse,
    CandidateQuery, CreateCandidateRequest,
};

use vg_core::NewCandidate;
use vg_db::{CandidateRepository, RegionRepository};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use log::info;

/// POST /api/admin/candidates
pub async fn create_candidate(
    _admin: AdminGuard,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCandidateRequest>,
) -> ApiResult<(StatusCode, Json<CandidateDto>)> {
    let mut new_candidate = NewCandidate {
        name: req.name.trim().to_string(),
        party: req.party.filter(|p| !p.trim().is_empty()),
        region_id: req.region_id,
        ledger_object_id: req.ledger_object_id,
    };
    new_candidate.validate()?;

    if let Some(region_id) = new_candidate.region_id
        && RegionRepository::new(state.pool.clone())
            .find_by_id(region_id)
            .await?
            .is_none()
    {
        return Err(ApiError::not_found(format!("Region {} not found", region_id)));
    }

    let candidate = CandidateRepository::new(state.pool.clone())
        .create(&new_candidate)
        .await?;

    info!("[ADMIN] candidate {} created: {}", candidate.id, candidate.name);

    Ok((StatusCode::CREATED, Json(candidate.into())))
}

/// GET /api/admin/candidates
pub async fn list_candidates(
    _admin: AdminGuard,
    State(state): State<AppState>,
) -> ApiResult<Json<CandidateListResponse>> {
    let candidates = CandidateRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(CandidateListResponse {
        candidates: candidates.into_iter().map(CandidateDto::from).collect(),
    }))
}

/// GET /api/candidates
///
/// Public candidate list, optionally narrowed with `?regionId=`
pub async fn list_public_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateQuery>,
) -> ApiResult<Json<CandidateListResponse>> {
    let repo = CandidateRepository::new(state.pool.clone());
    let candidates = match query.region_id {
        Some(region_id) => repo.find_by_region(region_id).await?,
        None => repo.find_all().await?,
    };

    Ok(Json(CandidateListResponse {
        candidates: candidates.into_iter().map(CandidateDto::from).collect(),
    }))
}
