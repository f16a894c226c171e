pub mod sponsor_vote_request;
pub mod sponsor_vote_response;
pub mod votes;
