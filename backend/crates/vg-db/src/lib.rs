pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::candidate_repository::CandidateRepository;
pub use repositories::citizen_repository::CitizenRepository;
pub use repositories::election_repository::ElectionRepository;
pub use repositories::region_repository::RegionRepository;
pub use repositories::voter_history_repository::VoterHistoryRepository;
