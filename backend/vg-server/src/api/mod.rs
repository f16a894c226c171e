pub mod candidates;
pub mod citizens;
pub mod elections;
pub mod error;
pub mod extractors;
pub mod regions;
pub mod tickets;
pub mod votes;
