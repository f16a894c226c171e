use crate::{DbError, Result as DbErrorResult, repositories::timestamp};

use vg_core::{Election, NewElection};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const ELECTION_COLUMNS: &str =
    "id, name, description, starts_at, ends_at, ledger_object_id, is_active, created_at";

pub struct ElectionRepository {
    pool: SqlitePool,
}

impl ElectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, election: &NewElection) -> DbErrorResult<Election> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO elections
                  (name, description, starts_at, ends_at, ledger_object_id, is_active, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&election.name)
        .bind(&election.description)
        .bind(election.starts_at.timestamp())
        .bind(election.ends_at.timestamp())
        .bind(&election.ledger_object_id)
        .bind(election.is_active)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::NotFound {
                message: format!("election {} missing after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Election>> {
        let row = sqlx::query(&format!("SELECT {ELECTION_COLUMNS} FROM elections WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_election).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Election>> {
        let rows = sqlx::query(&format!(
            "SELECT {ELECTION_COLUMNS} FROM elections ORDER BY starts_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_election).collect()
    }

    /// Active elections whose voting period contains `now`
    pub async fn find_open(&self, now: DateTime<Utc>) -> DbErrorResult<Vec<Election>> {
        let now = now.timestamp();

        let rows = sqlx::query(&format!(
            r#"
                SELECT {ELECTION_COLUMNS} FROM elections
                WHERE is_active = 1 AND starts_at <= ? AND ends_at > ?
                ORDER BY ends_at ASC
                "#
        ))
        .bind(now)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_election).collect()
    }
}

fn map_election(row: &SqliteRow) -> DbErrorResult<Election> {
    Ok(Election {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        starts_at: timestamp(row.try_get("starts_at")?, "elections.starts_at")?,
        ends_at: timestamp(row.try_get("ends_at")?, "elections.ends_at")?,
        ledger_object_id: row.try_get("ledger_object_id")?,
        is_active: row.try_get("is_active")?,
        created_at: timestamp(row.try_get("created_at")?, "elections.created_at")?,
    })
}
