mod citizen;
mod election;
mod identity_number;
mod wallet_address;
