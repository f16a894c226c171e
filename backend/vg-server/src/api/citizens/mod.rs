pub mod address_dto;
pub mod citizens;
pub mod login_request;
pub mod login_response;
pub mod profile_response;
pub mod register_request;
pub mod register_response;
pub mod ticket_dto;
