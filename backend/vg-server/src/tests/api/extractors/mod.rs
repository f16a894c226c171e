mod admin_guard;
mod session_claims;
