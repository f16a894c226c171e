use crate::{DbError, Result as DbErrorResult, repositories::timestamp};

use vg_core::{Citizen, IdentityNumber, NewCitizen, PostalAddress, WalletAddress};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const CITIZEN_COLUMNS: &str = r#"
    id, identity_number, first_name, last_name, full_address, city, district,
    neighborhood, age, password_hash, wallet_address, ticket_issued, created_at
"#;

pub struct CitizenRepository {
    pool: SqlitePool,
}

impl CitizenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_identity(
        &self,
        identity_number: &IdentityNumber,
    ) -> DbErrorResult<Option<Citizen>> {
        let row = sqlx::query(&format!(
            "SELECT {CITIZEN_COLUMNS} FROM citizens WHERE identity_number = ?"
        ))
        .bind(identity_number.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_citizen).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Citizen>> {
        let row = sqlx::query(&format!("SELECT {CITIZEN_COLUMNS} FROM citizens WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_citizen).transpose()
    }

    /// Existence check run before hashing a password on registration
    pub async fn exists(&self, identity_number: &IdentityNumber) -> DbErrorResult<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM citizens WHERE identity_number = ?")
                .bind(identity_number.as_str())
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    /// Insert a citizen.
    ///
    /// Returns [`DbError::UniqueViolation`] when the identity number is taken,
    /// even if a concurrent request inserted it after the caller's pre-check.
    pub async fn create(&self, citizen: &NewCitizen) -> DbErrorResult<Citizen> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO citizens (
                  identity_number, first_name, last_name, full_address, city, district,
                  neighborhood, age, password_hash, wallet_address, ticket_issued, created_at
              )
              VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?)
              "#,
        )
        .bind(citizen.identity_number.as_str())
        .bind(&citizen.first_name)
        .bind(&citizen.last_name)
        .bind(&citizen.address.street)
        .bind(&citizen.address.city)
        .bind(&citizen.address.district)
        .bind(&citizen.address.neighborhood)
        .bind(citizen.age)
        .bind(&citizen.password_hash)
        .bind(citizen.wallet_address.as_ref().map(WalletAddress::as_str))
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::NotFound {
                message: format!("citizen {} missing after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn set_wallet_address(
        &self,
        id: i64,
        wallet_address: &WalletAddress,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE citizens SET wallet_address = ? WHERE id = ?")
            .bind(wallet_address.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_citizen(row: &SqliteRow) -> DbErrorResult<Citizen> {
    let identity_number: String = row.try_get("identity_number")?;
    let wallet_address: Option<String> = row.try_get("wallet_address")?;

    Ok(Citizen {
        id: row.try_get("id")?,
        identity_number: IdentityNumber::parse(&identity_number).map_err(|e| {
            DbError::InvalidRow {
                message: format!("Invalid citizens.identity_number: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        address: PostalAddress {
            street: row.try_get("full_address")?,
            city: row.try_get("city")?,
            district: row.try_get("district")?,
            neighborhood: row.try_get("neighborhood")?,
        },
        age: row.try_get("age")?,
        password_hash: row.try_get("password_hash")?,
        wallet_address: wallet_address
            .map(|a| WalletAddress::parse(&a))
            .transpose()
            .map_err(|e| DbError::InvalidRow {
                message: format!("Invalid citizens.wallet_address: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
        ticket_issued: row.try_get("ticket_issued")?,
        created_at: timestamp(row.try_get("created_at")?, "citizens.created_at")?,
    })
}
