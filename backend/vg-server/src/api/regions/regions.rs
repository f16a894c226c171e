use crate::{
    AdminGuard, ApiError, ApiJson, ApiResult, AppState, CreateRegionRequest, RegionDto,
    RegionListResponse,
};

use vg_core::NewRegion;
use vg_db::RegionRepository;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// POST /api/admin/regions
pub async fn create_region(
    _admin: AdminGuard,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateRegionRequest>,
) -> ApiResult<(StatusCode, Json<RegionDto>)> {
    let mut new_region = NewRegion {
        name: req.name.trim().to_string(),
        ledger_object_id: req.ledger_object_id,
    };
    new_region.validate()?;

    let region = match RegionRepository::new(state.pool.clone())
        .create(&new_region)
        .await
    {
        Ok(region) => region,
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict(format!(
                "Region '{}' already exists",
                new_region.name
            )));
        }
        Err(e) => return Err(e.into()),
    };

    info!("[ADMIN] region {} created: {}", region.id, region.name);

    Ok((StatusCode::CREATED, Json(region.into())))
}

/// GET /api/admin/regions
pub async fn list_regions(
    _admin: AdminGuard,
    State(state): State<AppState>,
) -> ApiResult<Json<RegionListResponse>> {
    let regions = RegionRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(RegionListResponse {
        regions: regions.into_iter().map(RegionDto::from).collect(),
    }))
}
