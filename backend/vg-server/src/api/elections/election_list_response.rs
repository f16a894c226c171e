use crate::ElectionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ElectionListResponse {
    pub elections: Vec<ElectionDto>,
}
