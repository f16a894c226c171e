use crate::{LedgerError, LedgerErrorResult};

use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Minimal JSON-RPC 2.0 client over HTTP
pub struct RpcClient {
    pub url: String,
    client: ReqwestClient,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client for `url`. `timeout` of `None` keeps reqwest's default (none).
    pub fn new(url: &str, timeout: Option<Duration>) -> LedgerErrorResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            next_id: AtomicU64::new(1),
        })
    }

    /// Call `method` and deserialize its `result`
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> LedgerErrorResult<R> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("JSON-RPC {} (id {})", method, id);

        let response = self.client.post(&self.url).json(&request).send().await?;
        let status = response.status();
        let mut body: Value = response.json().await?;

        if let Some(error) = body.get("error") {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            return Err(LedgerError::Rpc {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !status.is_success() {
            return Err(LedgerError::Rpc {
                code: i64::from(status.as_u16()),
                message: format!("{} returned HTTP {}", method, status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let result = body
            .get_mut("result")
            .map(Value::take)
            .ok_or_else(|| {
                LedgerError::invalid_response(format!("{} response has no result", method))
            })?;

        Ok(serde_json::from_value(result)?)
    }
}
