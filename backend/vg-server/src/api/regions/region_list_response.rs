use crate::RegionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegionListResponse {
    pub regions: Vec<RegionDto>,
}
