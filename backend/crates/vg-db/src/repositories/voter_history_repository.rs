use crate::{DbError, Result as DbErrorResult, repositories::timestamp};

use vg_core::{VoterHistory, WalletAddress};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct VoterHistoryRepository {
    pool: SqlitePool,
}

impl VoterHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(
        &self,
        citizen_id: i64,
        election_id: i64,
    ) -> DbErrorResult<Option<VoterHistory>> {
        let row = sqlx::query(
            r#"
                SELECT id, citizen_id, election_id, wallet_address, tx_digest, issued_at
                FROM voter_history
                WHERE citizen_id = ? AND election_id = ?
                "#,
        )
        .bind(citizen_id)
        .bind(election_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_history).transpose()
    }

    pub async fn find_by_citizen(&self, citizen_id: i64) -> DbErrorResult<Vec<VoterHistory>> {
        let rows = sqlx::query(
            r#"
                SELECT id, citizen_id, election_id, wallet_address, tx_digest, issued_at
                FROM voter_history
                WHERE citizen_id = ?
                ORDER BY issued_at ASC, id ASC
                "#,
        )
        .bind(citizen_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_history).collect()
    }

    /// Record a ticket issuance and flag the citizen, atomically.
    ///
    /// A second issuance for the same (citizen, election) fails with
    /// [`DbError::UniqueViolation`] and leaves the citizen row untouched.
    pub async fn record_issuance(
        &self,
        citizen_id: i64,
        election_id: i64,
        wallet_address: &WalletAddress,
        tx_digest: Option<&str>,
    ) -> DbErrorResult<VoterHistory> {
        let issued_at = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
              INSERT INTO voter_history
                  (citizen_id, election_id, wallet_address, tx_digest, issued_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(citizen_id)
        .bind(election_id)
        .bind(wallet_address.as_str())
        .bind(tx_digest)
        .bind(issued_at)
        .execute(&mut *tx)
        .await?;

        let updated = sqlx::query("UPDATE citizens SET ticket_issued = 1 WHERE id = ?")
            .bind(citizen_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("citizen {} not found while recording issuance", citizen_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        tx.commit().await?;

        Ok(VoterHistory {
            id: result.last_insert_rowid(),
            citizen_id,
            election_id,
            wallet_address: wallet_address.to_string(),
            tx_digest: tx_digest.map(str::to_string),
            issued_at: timestamp(issued_at, "voter_history.issued_at")?,
        })
    }
}

fn map_history(row: &SqliteRow) -> DbErrorResult<VoterHistory> {
    Ok(VoterHistory {
        id: row.try_get("id")?,
        citizen_id: row.try_get("citizen_id")?,
        election_id: row.try_get("election_id")?,
        wallet_address: row.try_get("wallet_address")?,
        tx_digest: row.try_get("tx_digest")?,
        issued_at: timestamp(row.try_get("issued_at")?, "voter_history.issued_at")?,
    })
}
