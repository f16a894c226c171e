use crate::{CoreError, Result as CoreErrorResult, models::wallet_address::parse_object_id};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A candidate mirrored by a ledger object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub party: Option<String>,
    pub region_id: Option<i64>,
    pub ledger_object_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub name: String,
    pub party: Option<String>,
    pub region_id: Option<i64>,
    pub ledger_object_id: String,
}

impl NewCandidate {
    #[track_caller]
    pub fn validate(&mut self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "Candidate name cannot be empty".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.ledger_object_id = parse_object_id("ledgerObjectId", &self.ledger_object_id)?;
        Ok(())
    }
}
