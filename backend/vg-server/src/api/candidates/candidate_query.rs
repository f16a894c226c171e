use serde::Deserialize;

/// Query string for `GET /api/candidates`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateQuery {
    pub region_id: Option<i64>,
}
