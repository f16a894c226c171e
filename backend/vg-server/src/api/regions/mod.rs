pub mod create_region_request;
pub mod region_dto;
pub mod region_list_response;
pub mod regions;
