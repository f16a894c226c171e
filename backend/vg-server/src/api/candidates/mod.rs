pub mod candidate_dto;
pub mod candidate_list_response;
pub mod candidate_query;
pub mod candidates;
pub mod create_candidate_request;
