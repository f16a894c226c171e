pub mod claims;
pub mod credential_service;
pub mod error;
pub mod password;
pub mod session_issuer;
pub mod wallet_keypair;

pub use claims::{Claims, SessionSubject};
pub use credential_service::CredentialService;
pub use error::{AuthError, Result};
pub use session_issuer::SessionIssuer;
pub use wallet_keypair::{WalletKeypair, derive_wallet_keypair, sui_address};
