//! Citizen registration, login and profile handlers

use crate::{
    ApiError, ApiJson, ApiResult, AppState, LoginRequest, LoginResponse, LoginUserDto,
    ProfileResponse, RegisterRequest, RegisterResponse, RegisteredUserDto, SessionClaims,
};

use vg_auth::{CredentialService, SessionSubject};
use vg_core::{IdentityNumber, NewCitizen, PostalAddress};
use vg_db::{CitizenRepository, VoterHistoryRepository};

use axum::{Json, extract::State, http::StatusCode};
use log::{info, warn};

const MISSING_FIELDS: &str = "Please fill in all required fields.";
const ALREADY_REGISTERED: &str = "This Identity Number is already registered!";
const INVALID_CREDENTIALS: &str = "Invalid identity number or password.";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/register
///
/// Create a citizen account and derive its wallet address
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let (Some(identity_number), Some(first_name), Some(last_name), Some(password), Some(age)) = (
        required(req.identity_number),
        required(req.first_name),
        required(req.last_name),
        required(req.password),
        req.age,
    ) else {
        return Err(ApiError::validation(MISSING_FIELDS, None));
    };

    let identity_number = IdentityNumber::parse(identity_number.trim())?;
    NewCitizen::check_age(age)?;

    let repo = CitizenRepository::new(state.pool.clone());
    if repo.exists(&identity_number).await? {
        warn!("Duplicate registration attempt blocked");
        return Err(ApiError::conflict(ALREADY_REGISTERED));
    }

    let wallet_address = state.credentials.wallet_address(&identity_number, &password);
    let password_hash = hash_off_thread(&state.credentials, password).await?;

    let new_citizen = NewCitizen {
        identity_number,
        first_name,
        last_name,
        address: PostalAddress {
            street: required(req.address),
            city: required(req.city),
            district: required(req.district),
            neighborhood: required(req.neighborhood),
        },
        age,
        password_hash,
        wallet_address: Some(wallet_address.clone()),
    };

    // The pre-check can race with a concurrent registration
    let citizen = match repo.create(&new_citizen).await {
        Ok(citizen) => citizen,
        Err(e) if e.is_unique_violation() => {
            warn!("Duplicate registration caught by unique constraint");
            return Err(ApiError::conflict(ALREADY_REGISTERED));
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "[REGISTER] citizen {} registered with wallet {}",
        citizen.id, wallet_address
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful.".to_string(),
            user: RegisteredUserDto {
                identity_number: citizen.identity_number.to_string(),
                full_name: citizen.full_name(),
                wallet_address: wallet_address.to_string(),
            },
        }),
    ))
}

/// POST /api/login
///
/// Verify credentials and issue a session token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (Some(identity_number), Some(password)) =
        (required(req.identity_number), required(req.password))
    else {
        return Err(ApiError::validation(MISSING_FIELDS, None));
    };

    let identity_number = IdentityNumber::parse(identity_number.trim())?;

    let repo = CitizenRepository::new(state.pool.clone());
    let citizen = repo.find_by_identity(&identity_number).await?;

    // Unknown identities still pay for one Argon2 verification
    let digest = citizen.as_ref().map(|c| c.password_hash.clone());
    let password_matches = verify_off_thread(&state.credentials, password.clone(), digest).await?;

    let citizen = match citizen {
        Some(citizen) if password_matches => citizen,
        Some(citizen) => {
            warn!("[LOGIN] wrong password for citizen {}", citizen.id);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
        None => {
            warn!("[LOGIN] unknown identity number");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let wallet_address = match citizen.wallet_address.clone() {
        Some(address) => address,
        None => {
            let address = state
                .credentials
                .wallet_address(&citizen.identity_number, &password);
            repo.set_wallet_address(citizen.id, &address).await?;
            info!("[LOGIN] back-filled wallet for citizen {}", citizen.id);
            address
        }
    };

    let token = state.sessions.issue(&SessionSubject {
        citizen_id: citizen.id,
        identity_number: &citizen.identity_number,
        first_name: &citizen.first_name,
    })?;

    info!("[LOGIN] citizen {} logged in", citizen.id);

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        token,
        wallet_address: wallet_address.to_string(),
        user: LoginUserDto {
            first_name: citizen.first_name,
            last_name: citizen.last_name,
            city: citizen.address.city,
        },
    }))
}

/// GET /api/me
///
/// Profile of the session's citizen
pub async fn me(
    State(state): State<AppState>,
    session: SessionClaims,
) -> ApiResult<Json<ProfileResponse>> {
    let citizen_id = session.citizen_id()?;

    let repo = CitizenRepository::new(state.pool.clone());
    let citizen = repo
        .find_by_id(citizen_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User data not found."))?;

    let history = VoterHistoryRepository::new(state.pool.clone())
        .find_by_citizen(citizen_id)
        .await?;

    Ok(Json(ProfileResponse::new(citizen, history)))
}

// =============================================================================
// Helpers
// =============================================================================

/// Treat absent and blank strings alike
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Argon2 is CPU-bound; keep it off the async workers
async fn hash_off_thread(credentials: &CredentialService, password: String) -> ApiResult<String> {
    let credentials = credentials.clone();
    let digest = tokio::task::spawn_blocking(move || credentials.hash(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing task failed: {}", e)))??;
    Ok(digest)
}

/// `None` verifies against the decoy digest
async fn verify_off_thread(
    credentials: &CredentialService,
    password: String,
    digest: Option<String>,
) -> ApiResult<bool> {
    let credentials = credentials.clone();
    tokio::task::spawn_blocking(move || match digest {
        Some(digest) => credentials.verify(&password, &digest),
        None => credentials.verify_decoy(&password),
    })
    .await
    .map_err(|e| ApiError::internal(format!("Password check task failed: {}", e)))
}
