//! Deterministic wallet keys.
//!
//! A citizen's wallet key is never stored. It is re-derived from the identity
//! number, the password and a server-held secret, so the same credentials
//! always yield the same ledger address.
//!
//! Tradeoffs of this scheme:
//! - anyone holding the server secret and one citizen's password can derive
//!   that citizen's private key;
//! - changing a password yields a different key, orphaning whatever the old
//!   address held on the ledger.

use crate::{AuthError, Result as AuthErrorResult};

use vg_core::{IdentityNumber, WalletAddress};

use std::fmt;
use std::panic::Location;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as _};
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use error_location::ErrorLocation;
use sha2::Sha256;

/// Signature scheme flag for Ed25519 on the ledger
pub const ED25519_FLAG: u8 = 0x00;

type Blake2b256 = Blake2b<U32>;

/// An Ed25519 keypair with its ledger address
#[derive(Clone)]
pub struct WalletKeypair {
    signing_key: SigningKey,
}

impl WalletKeypair {
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    /// Build from a slice that must be exactly 32 bytes
    #[track_caller]
    pub fn from_secret_slice(secret: &[u8]) -> AuthErrorResult<Self> {
        let bytes: [u8; 32] = secret.try_into().map_err(|_| AuthError::InvalidKey {
            message: format!("expected 32 secret key bytes, got {}", secret.len()),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self::from_secret_bytes(&bytes))
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key().to_bytes()
    }

    pub fn address(&self) -> WalletAddress {
        sui_address(&self.public_key_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }
}

impl fmt::Debug for WalletKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletKeypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// Ledger address of an Ed25519 public key: BLAKE2b-256(flag || public key)
pub fn sui_address(public_key: &[u8; 32]) -> WalletAddress {
    let mut hasher = Blake2b256::new();
    hasher.update([ED25519_FLAG]);
    hasher.update(public_key);
    let digest: [u8; 32] = hasher.finalize().into();
    WalletAddress::from_bytes(&digest)
}

/// Derive the wallet keypair for a citizen.
///
/// Pure: the seed is SHA-256 over `identity:password:secret`.
pub fn derive_wallet_keypair(
    identity_number: &IdentityNumber,
    password: &str,
    server_secret: &str,
) -> WalletKeypair {
    let mut hasher = Sha256::new();
    hasher.update(identity_number.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher.update(b":");
    hasher.update(server_secret.as_bytes());
    let seed: [u8; 32] = hasher.finalize().into();

    WalletKeypair::from_secret_bytes(&seed)
}
