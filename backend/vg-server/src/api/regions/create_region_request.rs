use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionRequest {
    /// Unique region name
    pub name: String,
    pub ledger_object_id: String,
}
