pub mod assign_ticket_request;
pub mod assign_ticket_response;
pub mod tickets;
