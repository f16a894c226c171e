pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::candidate::{Candidate, NewCandidate};
pub use models::citizen::{Citizen, NewCitizen, PostalAddress};
pub use models::election::{Election, NewElection};
pub use models::identity_number::IdentityNumber;
pub use models::region::{NewRegion, Region};
pub use models::voter_history::VoterHistory;
pub use models::wallet_address::WalletAddress;

/// Minimum age a citizen must have to register
pub const MIN_VOTING_AGE: i64 = 18;

#[cfg(test)]
mod tests;
