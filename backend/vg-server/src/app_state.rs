use vg_auth::{CredentialService, SessionIssuer};
use vg_ledger::Ledger;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionIssuer>,
    pub credentials: CredentialService,
    /// `None` when the ledger section is not configured
    pub ledger: Option<Arc<dyn Ledger>>,
    /// Required `X-Admin-Key` for admin routes, if set
    pub admin_api_key: Option<String>,
}
