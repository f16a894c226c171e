#![allow(dead_code)]

use vg_core::{IdentityNumber, NewCitizen, NewElection, PostalAddress};

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    vg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn count_citizens(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM citizens")
        .fetch_one(pool)
        .await
        .expect("Failed to count citizens")
}

pub fn new_citizen(identity_number: &str) -> NewCitizen {
    NewCitizen {
        identity_number: IdentityNumber::parse(identity_number).unwrap(),
        first_name: "Ada".to_string(),
        last_name: "Yilmaz".to_string(),
        address: PostalAddress {
            street: Some("Ataturk Cd. 1".to_string()),
            city: Some("Ankara".to_string()),
            district: Some("Cankaya".to_string()),
            neighborhood: None,
        },
        age: 20,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        wallet_address: None,
    }
}

pub fn new_election(name: &str) -> NewElection {
    let now = Utc::now();
    NewElection {
        name: name.to_string(),
        description: Some("Test election".to_string()),
        starts_at: now - Duration::hours(1),
        ends_at: now + Duration::days(1),
        ledger_object_id: None,
        is_active: true,
    }
}
