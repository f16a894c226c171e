use crate::{LedgerError, LedgerErrorResult};

use vg_auth::WalletKeypair;
use vg_auth::wallet_keypair::ED25519_FLAG;
use vg_core::WalletAddress;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as _};

/// Intent for signing `TransactionData`: scope, version, app id
pub const INTENT_PREFIX: [u8; 3] = [0, 0, 0];

const BECH32_KEY_PREFIX: &str = "suiprivkey";

/// BLAKE2b-256 over the intent prefix and the transaction bytes
pub fn intent_digest(tx_bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(INTENT_PREFIX);
    hasher.update(tx_bytes);
    hasher.finalize().into()
}

/// The server's ledger key, used to sign issuance and fee transactions
#[derive(Debug)]
pub struct AdminSigner {
    keypair: WalletKeypair,
}

impl AdminSigner {
    pub fn new(keypair: WalletKeypair) -> Self {
        Self { keypair }
    }

    /// Parse an Ed25519 private key.
    ///
    /// Accepts base64 of `flag || key` (the keystore format), base64 of the
    /// bare 32-byte key, or 32 bytes of hex with an optional `0x`.
    #[track_caller]
    pub fn from_encoded(encoded: &str) -> LedgerErrorResult<Self> {
        let encoded = encoded.trim();

        if encoded.starts_with(BECH32_KEY_PREFIX) {
            return Err(LedgerError::invalid_key(
                "bech32 'suiprivkey' keys are not supported, export the key as base64",
            ));
        }

        let hex_body = encoded.strip_prefix("0x").unwrap_or(encoded);
        let bytes = if hex_body.len() == 64 && hex_body.chars().all(|c| c.is_ascii_hexdigit()) {
            hex::decode(hex_body).map_err(|e| LedgerError::invalid_key(e.to_string()))?
        } else {
            BASE64
                .decode(encoded)
                .map_err(|e| LedgerError::invalid_key(format!("not base64 or hex: {}", e)))?
        };

        let secret = match bytes.as_slice() {
            [flag, rest @ ..] if rest.len() == 32 => {
                if *flag != ED25519_FLAG {
                    return Err(LedgerError::invalid_key(format!(
                        "unsupported signature scheme flag {:#04x}, only Ed25519 is supported",
                        flag
                    )));
                }
                rest
            }
            bytes if bytes.len() == 32 => bytes,
            bytes => {
                return Err(LedgerError::invalid_key(format!(
                    "expected 32 or 33 key bytes, got {}",
                    bytes.len()
                )));
            }
        };

        let keypair = WalletKeypair::from_secret_slice(secret)
            .map_err(|e| LedgerError::invalid_key(e.to_string()))?;
        Ok(Self::new(keypair))
    }

    pub fn address(&self) -> WalletAddress {
        self.keypair.address()
    }

    /// Sign base64 transaction bytes; returns the serialized signature
    /// `base64(flag || signature || public key)`
    #[track_caller]
    pub fn sign_transaction(&self, tx_bytes: &str) -> LedgerErrorResult<String> {
        let raw = BASE64
            .decode(tx_bytes)
            .map_err(|e| LedgerError::invalid_response(format!("txBytes is not base64: {}", e)))?;
        Ok(self.sign_bytes(&raw))
    }

    pub fn sign_bytes(&self, tx_bytes: &[u8]) -> String {
        let signature = self.keypair.sign(&intent_digest(tx_bytes));

        let mut serialized = Vec::with_capacity(1 + 64 + 32);
        serialized.push(ED25519_FLAG);
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&self.keypair.public_key_bytes());
        BASE64.encode(serialized)
    }
}
