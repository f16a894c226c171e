use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Election {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub ledger_object_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Election {
    /// Whether `now` falls inside the voting period of an active election
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.starts_at <= now && now < self.ends_at
    }
}

#[derive(Debug, Clone)]
pub struct NewElection {
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub ledger_object_id: Option<String>,
    pub is_active: bool,
}

impl NewElection {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "Election name cannot be empty".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.ends_at <= self.starts_at {
            return Err(CoreError::Validation {
                message: "Election must end after it starts".to_string(),
                field: Some("endsAt".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
