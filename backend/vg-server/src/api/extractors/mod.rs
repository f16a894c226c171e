pub mod admin_guard;
pub mod api_json;
pub mod session_claims;
