//! Ledger side of ticket issuance and vote sponsoring.
//!
//! The server talks to the ledger only through the [`Ledger`] trait.
//! [`SuiLedger`] implements it against a Sui full node's JSON-RPC API.

mod admin_signer;
mod error;
mod ledger;
mod rpc_client;
mod rpc_types;
mod sui_ledger;
mod transaction_data;

pub use admin_signer::{AdminSigner, INTENT_PREFIX, intent_digest};
pub use error::{LedgerError, LedgerErrorResult};
pub use ledger::{Ledger, SponsoredTransaction, TicketIssuance, TicketReceipt, VoteDraft};
pub use rpc_client::RpcClient;
pub use sui_ledger::SuiLedger;
pub use transaction_data::TransactionData;


/// Coin type used for gas and fee transfers
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";
