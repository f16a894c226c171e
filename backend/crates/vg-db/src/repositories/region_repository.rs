use crate::{Result as DbErrorResult, repositories::timestamp};

use vg_core::{NewRegion, Region};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct RegionRepository {
    pool: SqlitePool,
}

impl RegionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, region: &NewRegion) -> DbErrorResult<Region> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            "INSERT INTO regions (name, ledger_object_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(&region.name)
        .bind(&region.ledger_object_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Region {
            id: result.last_insert_rowid(),
            name: region.name.clone(),
            ledger_object_id: region.ledger_object_id.clone(),
            created_at: timestamp(created_at, "regions.created_at")?,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Region>> {
        let row = sqlx::query(
            "SELECT id, name, ledger_object_id, created_at FROM regions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_region).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Region>> {
        let rows = sqlx::query(
            "SELECT id, name, ledger_object_id, created_at FROM regions ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_region).collect()
    }
}

fn map_region(row: &SqliteRow) -> DbErrorResult<Region> {
    Ok(Region {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        ledger_object_id: row.try_get("ledger_object_id")?,
        created_at: timestamp(row.try_get("created_at")?, "regions.created_at")?,
    })
}
