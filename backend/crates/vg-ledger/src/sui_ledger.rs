use crate::rpc_types::{CoinPage, ExecutionResponse, TransactionBlockBytes};
use crate::{
    AdminSigner, Ledger, LedgerError, LedgerErrorResult, RpcClient, SUI_COIN_TYPE,
    SponsoredTransaction, TicketIssuance, TicketReceipt, TransactionData, VoteDraft,
};

use vg_config::LedgerConfig;
use vg_core::WalletAddress;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use error_location::ErrorLocation;
use log::{error, info};
use serde_json::{Value, json};

/// Coins fetched per page when paying gas or the fee allowance
const COIN_PAGE_LIMIT: u32 = 50;

/// [`Ledger`] backed by a Sui full node.
///
/// Transactions are built by the node (`unsafe_moveCall`, `unsafe_paySui`)
/// and signed locally with the admin key. Admin transactions are executed
/// with `WaitForLocalExecution`; vote transactions are only co-signed as
/// sponsor and handed back to the citizen.
pub struct SuiLedger {
    rpc: RpcClient,
    signer: AdminSigner,
    config: LedgerConfig,
}

impl SuiLedger {
    pub fn new(rpc: RpcClient, signer: AdminSigner, config: LedgerConfig) -> Self {
        Self {
            rpc,
            signer,
            config,
        }
    }

    /// Build from config. `Ok(None)` when no admin key is configured.
    pub fn from_config(config: &LedgerConfig) -> LedgerErrorResult<Option<Self>> {
        let Some(key) = config
            .admin_private_key
            .as_deref()
            .filter(|_| config.is_enabled())
        else {
            return Ok(None);
        };

        let signer = AdminSigner::from_encoded(key)?;
        let timeout = (config.request_timeout_secs > 0)
            .then(|| Duration::from_secs(config.request_timeout_secs));
        let rpc = RpcClient::new(&config.rpc_url, timeout)?;

        Ok(Some(Self::new(rpc, signer, config.clone())))
    }

    pub fn admin_address(&self) -> WalletAddress {
        self.signer.address()
    }

    /// Ask the node to build a Move call transaction. With `gas` unset the
    /// node picks a coin owned by `sender`.
    async fn move_call(
        &self,
        sender: &WalletAddress,
        function: &str,
        arguments: Vec<Value>,
        gas: Option<&str>,
    ) -> LedgerErrorResult<String> {
        let built: TransactionBlockBytes = self
            .rpc
            .call(
                "unsafe_moveCall",
                json!([
                    sender.as_str(),
                    self.config.package_id,
                    self.config.module,
                    function,
                    [],
                    arguments,
                    gas,
                    self.config.gas_budget.to_string(),
                ]),
            )
            .await?;
        Ok(built.tx_bytes)
    }

    /// Sign with the admin key, execute, and return the digest if effects report success
    async fn execute(&self, tx_bytes: &str) -> LedgerErrorResult<String> {
        let signature = self.signer.sign_transaction(tx_bytes)?;

        let response: ExecutionResponse = self
            .rpc
            .call(
                "sui_executeTransactionBlock",
                json!([
                    tx_bytes,
                    [signature],
                    { "showEffects": true },
                    "WaitForLocalExecution",
                ]),
            )
            .await?;

        let status = response
            .effects
            .map(|effects| effects.status)
            .ok_or_else(|| LedgerError::invalid_response("execution response has no effects"))?;

        if !status.is_success() {
            return Err(LedgerError::Execution {
                digest: response.digest,
                message: status.error.unwrap_or(status.status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.digest)
    }

    /// Admin-owned SUI coin ids
    async fn admin_coins(&self) -> LedgerErrorResult<Vec<String>> {
        let page: CoinPage = self
            .rpc
            .call(
                "suix_getCoins",
                json!([
                    self.admin_address().as_str(),
                    SUI_COIN_TYPE,
                    null,
                    COIN_PAGE_LIMIT,
                ]),
            )
            .await?;

        Ok(page
            .data
            .into_iter()
            .filter(|coin| coin.balance.parse::<u64>().is_ok_and(|balance| balance > 0))
            .map(|coin| coin.coin_object_id)
            .collect())
    }

    /// Send `amount` MIST from the admin to `recipient`
    async fn transfer_fee(
        &self,
        recipient: &WalletAddress,
        amount: u64,
    ) -> LedgerErrorResult<String> {
        let coins = self.funded_admin_coins().await?;

        let built: TransactionBlockBytes = self
            .rpc
            .call(
                "unsafe_paySui",
                json!([
                    self.admin_address().as_str(),
                    coins,
                    [recipient.as_str()],
                    [amount.to_string()],
                    self.config.gas_budget.to_string(),
                ]),
            )
            .await?;

        self.execute(&built.tx_bytes).await
    }

    async fn funded_admin_coins(&self) -> LedgerErrorResult<Vec<String>> {
        let coins = self.admin_coins().await?;
        if coins.is_empty() {
            return Err(LedgerError::invalid_response(
                "admin address holds no SUI coins",
            ));
        }
        Ok(coins)
    }

    fn issuance_arguments(&self, issuance: &TicketIssuance) -> Vec<Value> {
        let mut arguments = Vec::with_capacity(3);
        if let Some(cap) = &self.config.admin_cap_id {
            arguments.push(json!(cap));
        }
        match &issuance.election_object_id {
            Some(object_id) => arguments.push(json!(object_id)),
            None => arguments.push(json!(issuance.election_id.to_string())),
        }
        arguments.push(json!(issuance.recipient.as_str()));
        arguments
    }
}

#[async_trait]
impl Ledger for SuiLedger {
    async fn issue_ticket(&self, issuance: TicketIssuance) -> LedgerErrorResult<TicketReceipt> {
        let admin = self.admin_address();
        let tx_bytes = self
            .move_call(
                &admin,
                &self.config.issue_function,
                self.issuance_arguments(&issuance),
                None,
            )
            .await?;
        let digest = self.execute(&tx_bytes).await?;

        info!(
            "Ticket for election {} issued to {} ({})",
            issuance.election_id, issuance.recipient, digest
        );

        let fee_digest = if self.config.fee_allowance_mist > 0 {
            // The ticket is already on the ledger; a failed top-up must not undo that.
            match self
                .transfer_fee(&issuance.recipient, self.config.fee_allowance_mist)
                .await
            {
                Ok(fee_digest) => Some(fee_digest),
                Err(e) => {
                    error!(
                        "Fee allowance transfer to {} failed: {}",
                        issuance.recipient, e
                    );
                    None
                }
            }
        } else {
            None
        };

        Ok(TicketReceipt { digest, fee_digest })
    }

    async fn prepare_vote(&self, draft: VoteDraft) -> LedgerErrorResult<SponsoredTransaction> {
        let admin = self.admin_address();
        let coins = self.funded_admin_coins().await?;

        // The node resolves the admin coin into the gas payment but records
        // the citizen as gas owner; ownership is moved to the admin below.
        let built = self
            .move_call(
                &draft.sender,
                &self.config.vote_function,
                vec![
                    json!(draft.ticket_id),
                    json!(draft.candidate_object_id),
                    json!(draft.region_object_id),
                ],
                coins.first().map(String::as_str),
            )
            .await?;

        let mut tx = TransactionData::from_base64(&built)?;
        if tx.sender() != draft.sender {
            return Err(LedgerError::invalid_response(format!(
                "node built a transaction for {} instead of {}",
                tx.sender(),
                draft.sender
            )));
        }
        tx.set_gas_owner(&admin)?;

        let sponsored = tx.to_bcs()?;
        let sponsor_signature = self.signer.sign_bytes(&sponsored);

        info!(
            "Sponsored vote transaction for {} (gas owner {})",
            draft.sender, admin
        );

        Ok(SponsoredTransaction {
            tx_bytes: BASE64.encode(&sponsored),
            sponsor_signature,
            gas_budget: tx.gas_budget(),
            sender: draft.sender,
            gas_owner: admin,
        })
    }
}
