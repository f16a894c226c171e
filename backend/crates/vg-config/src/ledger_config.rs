use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FEE_ALLOWANCE_MIST, DEFAULT_GAS_BUDGET,
    DEFAULT_ISSUE_FUNCTION, DEFAULT_LEDGER_MODULE, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RPC_URL, DEFAULT_VOTE_FUNCTION, MAX_GAS_BUDGET,
};

use serde::Deserialize;

/// Sui node and voting package settings.
///
/// Without `admin_private_key` the relay is disabled and ticket issuance
/// answers with an external-service error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint of a full node
    pub rpc_url: String,
    pub admin_private_key: Option<String>,
    pub package_id: String,
    pub module: String,
    pub issue_function: String,
    pub vote_function: String,
    /// Capability object passed as the first issuance argument, if the package needs one
    pub admin_cap_id: Option<String>,
    /// Gas budget in MIST for every transaction the server builds
    pub gas_budget: u64,
    /// SUI sent to a wallet after its ticket is issued (0 = none)
    pub fee_allowance_mist: u64,
    /// 0 = no timeout
    pub request_timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::from(DEFAULT_RPC_URL),
            admin_private_key: None,
            package_id: String::new(),
            module: String::from(DEFAULT_LEDGER_MODULE),
            issue_function: String::from(DEFAULT_ISSUE_FUNCTION),
            vote_function: String::from(DEFAULT_VOTE_FUNCTION),
            admin_cap_id: None,
            gas_budget: DEFAULT_GAS_BUDGET,
            fee_allowance_mist: DEFAULT_FEE_ALLOWANCE_MIST,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl LedgerConfig {
    /// True when an admin key is present
    pub fn is_enabled(&self) -> bool {
        self.admin_private_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(ConfigError::ledger(format!(
                "ledger.rpc_url must be an http(s) URL, got '{}'",
                self.rpc_url
            )));
        }

        if self.gas_budget == 0 || self.gas_budget > MAX_GAS_BUDGET {
            return Err(ConfigError::ledger(format!(
                "ledger.gas_budget must be 1-{}, got {}",
                MAX_GAS_BUDGET, self.gas_budget
            )));
        }

        if !self.is_enabled() {
            return Ok(());
        }

        // Only checked when the relay is on.
        if !is_object_id(&self.package_id) {
            return Err(ConfigError::ledger(
                "ledger.package_id must be a 0x-prefixed object id when admin_private_key is set",
            ));
        }

        for (name, value) in [
            ("module", &self.module),
            ("issue_function", &self.issue_function),
            ("vote_function", &self.vote_function),
        ] {
            if !is_move_identifier(value) {
                return Err(ConfigError::ledger(format!(
                    "ledger.{} must be a Move identifier, got '{}'",
                    name, value
                )));
            }
        }

        if let Some(cap) = &self.admin_cap_id
            && !is_object_id(cap)
        {
            return Err(ConfigError::ledger(
                "ledger.admin_cap_id must be a 0x-prefixed object id",
            ));
        }

        Ok(())
    }
}

fn is_object_id(value: &str) -> bool {
    value.strip_prefix("0x").is_some_and(|hex| {
        !hex.is_empty() && hex.len() <= 64 && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

fn is_move_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
