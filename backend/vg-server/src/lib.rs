pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    candidates::{
        candidate_dto::CandidateDto,
        candidate_list_response::CandidateListResponse,
        candidate_query::CandidateQuery,
        candidates::{create_candidate, list_candidates, list_public_candidates},
        create_candidate_request::CreateCandidateRequest,
    },
    citizens::{
        address_dto::AddressDto,
        citizens::{login, me, register},
        login_request::LoginRequest,
        login_response::{LoginResponse, LoginUserDto},
        profile_response::ProfileResponse,
        register_request::RegisterRequest,
        register_response::{RegisterResponse, RegisteredUserDto},
        ticket_dto::TicketDto,
    },
    elections::{
        create_election_request::CreateElectionRequest,
        election_dto::ElectionDto,
        election_list_response::ElectionListResponse,
        elections::{create_election, list_elections, list_open_elections},
    },
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
    extractors::admin_guard::{ADMIN_KEY_HEADER, AdminGuard},
    extractors::api_json::ApiJson,
    extractors::session_claims::SessionClaims,
    regions::{
        create_region_request::CreateRegionRequest,
        region_dto::RegionDto,
        region_list_response::RegionListResponse,
        regions::{create_region, list_regions},
    },
    tickets::{
        assign_ticket_request::AssignTicketRequest, assign_ticket_response::AssignTicketResponse,
        tickets::assign_ticket,
    },
    votes::{
        sponsor_vote_request::SponsorVoteRequest, sponsor_vote_response::SponsorVoteResponse,
        votes::sponsor_vote,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
