use crate::{AddressDto, TicketDto};

use vg_core::{Citizen, VoterHistory};

use serde::Serialize;

/// Body of `GET /api/me`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub identity_number: String,
    pub first_name: String,
    pub last_name: String,
    pub address: AddressDto,
    pub age: i64,
    pub wallet_address: Option<String>,
    pub ticket_issued: bool,
    /// Issued tickets, oldest first
    pub tickets: Vec<TicketDto>,
}

impl ProfileResponse {
    pub fn new(c: Citizen, history: Vec<VoterHistory>) -> Self {
        Self {
            identity_number: c.identity_number.to_string(),
            first_name: c.first_name,
            last_name: c.last_name,
            address: c.address.into(),
            age: c.age,
            wallet_address: c.wallet_address.map(String::from),
            ticket_issued: c.ticket_issued,
            tickets: history.into_iter().map(TicketDto::from).collect(),
        }
    }
}
