pub mod create_election_request;
pub mod election_dto;
pub mod election_list_response;
pub mod elections;
