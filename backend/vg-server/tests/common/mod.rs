#![allow(dead_code)]

//! Test infrastructure for vg-server API tests

use vg_auth::{CredentialService, SessionIssuer};
use vg_core::WalletAddress;
use vg_db::VoterHistoryRepository;
use vg_ledger::{
    Ledger, LedgerError, LedgerErrorResult, SponsoredTransaction, TicketIssuance, TicketReceipt,
    VoteDraft,
};
use vg_server::{AppState, build_router};

use std::panic::Location;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-jwt-secret-32-bytes";
pub const TEST_WALLET_SECRET: &str = "integration-test-wallet-secret";
pub const ADMIN_KEY: &str = "integration-admin-key";

pub const IDENTITY_NUMBER: &str = "12345678901";
pub const PASSWORD: &str = "correct horse battery staple";

pub const ELECTION_OBJECT_ID: &str = "0xe1";
pub const REGION_OBJECT_ID: &str = "0xa1";
pub const CANDIDATE_OBJECT_ID: &str = "0xc1";
pub const TICKET_OBJECT_ID: &str = "0x7";
pub const SPONSOR_ADDRESS: &str = "0x5";

/// In-memory ledger that records every call
#[derive(Default)]
pub struct FakeLedger {
    pub issue_calls: AtomicUsize,
    pub vote_calls: AtomicUsize,
    pub last_issuance: Mutex<Option<TicketIssuance>>,
    pub last_draft: Mutex<Option<VoteDraft>>,
    /// Citizen whose issuance gets recorded by a competing request while
    /// the ledger call is in flight
    pub competing_issuance: Mutex<Option<(SqlitePool, i64)>>,
    pub fail: bool,
}

impl FakeLedger {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn record_competing_issuance(&self, pool: &SqlitePool, citizen_id: i64) {
        *self.competing_issuance.lock().unwrap() = Some((pool.clone(), citizen_id));
    }

    pub fn issue_count(&self) -> usize {
        self.issue_calls.load(Ordering::SeqCst)
    }

    pub fn vote_count(&self) -> usize {
        self.vote_calls.load(Ordering::SeqCst)
    }

    fn rejection(&self) -> LedgerError {
        LedgerError::Rpc {
            code: -32000,
            message: "node unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl Ledger for FakeLedger {
    async fn issue_ticket(&self, issuance: TicketIssuance) -> LedgerErrorResult<TicketReceipt> {
        let n = self.issue_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(self.rejection());
        }

        let competing = self.competing_issuance.lock().unwrap().take();
        if let Some((pool, citizen_id)) = competing {
            VoterHistoryRepository::new(pool)
                .record_issuance(
                    citizen_id,
                    issuance.election_id,
                    &issuance.recipient,
                    Some("competing-digest"),
                )
                .await
                .expect("Failed to record competing issuance");
        }

        *self.last_issuance.lock().unwrap() = Some(issuance);
        Ok(TicketReceipt {
            digest: format!("issue-digest-{}", n),
            fee_digest: Some(format!("fee-digest-{}", n)),
        })
    }

    async fn prepare_vote(&self, draft: VoteDraft) -> LedgerErrorResult<SponsoredTransaction> {
        self.vote_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(self.rejection());
        }

        let sender = draft.sender.clone();
        *self.last_draft.lock().unwrap() = Some(draft);
        Ok(SponsoredTransaction {
            tx_bytes: "AAECAw==".to_string(),
            sponsor_signature: "c3BvbnNvcg==".to_string(),
            gas_budget: 10_000_000,
            sender,
            gas_owner: WalletAddress::parse(SPONSOR_ADDRESS).unwrap(),
        })
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    // One connection, otherwise each connection gets its own empty database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    vg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state(
    ledger: Option<Arc<FakeLedger>>,
    admin_api_key: Option<&str>,
) -> AppState {
    AppState {
        pool: create_test_pool().await,
        sessions: Arc::new(SessionIssuer::new(
            TEST_JWT_SECRET,
            Duration::from_secs(3600),
        )),
        credentials: CredentialService::new(TEST_WALLET_SECRET),
        ledger: ledger.map(|l| l as Arc<dyn Ledger>),
        admin_api_key: admin_api_key.map(str::to_string),
    }
}

/// Wallet the server derives for the default test citizen
pub fn expected_wallet() -> WalletAddress {
    CredentialService::new(TEST_WALLET_SECRET).wallet_address(
        &vg_core::IdentityNumber::parse(IDENTITY_NUMBER).unwrap(),
        PASSWORD,
    )
}

pub fn registration_body(identity_number: &str) -> Value {
    json!({
        "identityNumber": identity_number,
        "firstName": "Ayse",
        "lastName": "Yilmaz",
        "address": "Ataturk Cd. 12",
        "city": "Izmir",
        "district": "Konak",
        "neighborhood": "Alsancak",
        "age": 34,
        "password": PASSWORD,
    })
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// POST a raw body, optionally without a JSON content type
pub async fn send_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    let request = builder.body(Body::from(body.to_string())).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Register the default citizen and return a session token
pub async fn register_and_login(app: &Router) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/api/register",
        &[],
        Some(registration_body(IDENTITY_NUMBER)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(
        app,
        "POST",
        "/api/login",
        &[],
        Some(json!({ "identityNumber": IDENTITY_NUMBER, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    json["token"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Insert an election that is open right now
pub async fn create_open_election(pool: &SqlitePool) -> i64 {
    let now = chrono::Utc::now().timestamp();
    insert_election(pool, now - 3600, now + 3600, true).await
}

/// Insert an election whose voting period is already over
pub async fn create_closed_election(pool: &SqlitePool) -> i64 {
    let now = chrono::Utc::now().timestamp();
    insert_election(pool, now - 7200, now - 3600, true).await
}

/// Insert an election that is inside its period but switched off
pub async fn create_inactive_election(pool: &SqlitePool) -> i64 {
    let now = chrono::Utc::now().timestamp();
    insert_election(pool, now - 3600, now + 3600, false).await
}

async fn insert_election(pool: &SqlitePool, starts_at: i64, ends_at: i64, is_active: bool) -> i64 {
    let now = chrono::Utc::now().timestamp();
    sqlx::query(
        r#"
        INSERT INTO elections
            (name, description, starts_at, ends_at, ledger_object_id, is_active, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("General Election")
    .bind("Test election")
    .bind(starts_at)
    .bind(ends_at)
    .bind(WalletAddress::parse(ELECTION_OBJECT_ID).unwrap().to_string())
    .bind(is_active)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test election")
    .last_insert_rowid()
}

pub async fn create_region(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO regions (name, ledger_object_id, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(WalletAddress::parse(REGION_OBJECT_ID).unwrap().to_string())
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test region")
        .last_insert_rowid()
}

pub async fn create_candidate(pool: &SqlitePool, name: &str, region_id: Option<i64>) -> i64 {
    sqlx::query(
        r#"
        INSERT INTO candidates (name, party, region_id, ledger_object_id, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind("Independent")
    .bind(region_id)
    .bind(WalletAddress::parse(CANDIDATE_OBJECT_ID).unwrap().to_string())
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test candidate")
    .last_insert_rowid()
}

pub async fn count_citizens(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM citizens")
        .fetch_one(pool)
        .await
        .expect("Failed to count citizens")
}

pub async fn citizen_id(pool: &SqlitePool, identity_number: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM citizens WHERE identity_number = ?")
        .bind(identity_number)
        .fetch_one(pool)
        .await
        .expect("Failed to look up citizen")
}
