use serde::Deserialize;

/// Result of `unsafe_moveCall` / `unsafe_paySui`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionBlockBytes {
    pub tx_bytes: String,
}

/// Result of `suix_getCoins`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoinPage {
    pub data: Vec<Coin>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Coin {
    pub coin_object_id: String,
    pub balance: String,
}

/// Result of `sui_executeTransactionBlock` with `showEffects`
#[derive(Debug, Deserialize)]
pub(crate) struct ExecutionResponse {
    pub digest: String,
    pub effects: Option<Effects>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Effects {
    pub status: ExecutionStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExecutionStatus {
    pub status: String,
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
