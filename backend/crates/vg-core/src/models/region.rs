use crate::{CoreError, Result as CoreErrorResult, models::wallet_address::parse_object_id};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A geographic region mirrored by a ledger object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub ledger_object_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRegion {
    pub name: String,
    pub ledger_object_id: String,
}

impl NewRegion {
    /// Validate and normalize the ledger object id in place
    #[track_caller]
    pub fn validate(&mut self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "Region name cannot be empty".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.ledger_object_id = parse_object_id("ledgerObjectId", &self.ledger_object_id)?;
        Ok(())
    }
}
