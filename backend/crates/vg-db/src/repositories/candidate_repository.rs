use crate::{Result as DbErrorResult, repositories::timestamp};

use vg_core::{Candidate, NewCandidate};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const CANDIDATE_COLUMNS: &str = "id, name, party, region_id, ledger_object_id, created_at";

pub struct CandidateRepository {
    pool: SqlitePool,
}

impl CandidateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, candidate: &NewCandidate) -> DbErrorResult<Candidate> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO candidates (name, party, region_id, ledger_object_id, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.party)
        .bind(candidate.region_id)
        .bind(&candidate.ledger_object_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Candidate {
            id: result.last_insert_rowid(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            region_id: candidate.region_id,
            ledger_object_id: candidate.ledger_object_id.clone(),
            created_at: timestamp(created_at, "candidates.created_at")?,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Candidate>> {
        let row = sqlx::query(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_candidate).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Candidate>> {
        let rows = sqlx::query(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_candidate).collect()
    }

    pub async fn find_by_region(&self, region_id: i64) -> DbErrorResult<Vec<Candidate>> {
        let rows = sqlx::query(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE region_id = ? ORDER BY id ASC"
        ))
        .bind(region_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_candidate).collect()
    }
}

fn map_candidate(row: &SqliteRow) -> DbErrorResult<Candidate> {
    Ok(Candidate {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        party: row.try_get("party")?,
        region_id: row.try_get("region_id")?,
        ledger_object_id: row.try_get("ledger_object_id")?,
        created_at: timestamp(row.try_get("created_at")?, "candidates.created_at")?,
    })
}
