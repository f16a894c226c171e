pub mod candidate;
pub mod citizen;
pub mod election;
pub mod identity_number;
pub mod region;
pub mod voter_history;
pub mod wallet_address;
