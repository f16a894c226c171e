use crate::CandidateDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateDto>,
}
