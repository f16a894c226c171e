use crate::{Result as AuthErrorResult, WalletKeypair, derive_wallet_keypair, password};

use vg_core::{IdentityNumber, WalletAddress};

/// Password hashing and wallet derivation bound to the server's wallet secret
#[derive(Clone)]
pub struct CredentialService {
    wallet_secret: String,
}

impl CredentialService {
    pub fn new(wallet_secret: impl Into<String>) -> Self {
        Self {
            wallet_secret: wallet_secret.into(),
        }
    }

    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        password::hash_password(password)
    }

    pub fn verify(&self, password: &str, digest: &str) -> bool {
        password::verify_password(password, digest)
    }

    /// Verify against a throwaway digest; always `false`
    pub fn verify_decoy(&self, password: &str) -> bool {
        password::verify_decoy(password)
    }

    pub fn derive_keypair(
        &self,
        identity_number: &IdentityNumber,
        password: &str,
    ) -> WalletKeypair {
        derive_wallet_keypair(identity_number, password, &self.wallet_secret)
    }

    pub fn wallet_address(
        &self,
        identity_number: &IdentityNumber,
        password: &str,
    ) -> WalletAddress {
        self.derive_keypair(identity_number, password).address()
    }
}
