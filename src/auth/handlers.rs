use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        extractors::Args,
        jwt::JwtKeys,
        password::PasswordError,
        repo::InsertUserError,
        repo_types::NewUser,
        validation::{is_valid_email, is_valid_password},
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

pub const WEAK_PASSWORD: &str =
    "Password must be at least 8 characters long, contain a number, and a special character";
const REGISTER_FAILED: &str = "An error occurred during registration";
const LOGIN_FAILED: &str = "An error occurred during login";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, req))]
pub async fn register(
    State(state): State<AppState>,
    Args(req): Args<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    if !is_valid_email(&req.email) {
        warn!(email = %req.email, "invalid email address");
        return Err(ApiError::bad_request("Invalid email address"));
    }

    if !is_valid_password(&req.password) {
        warn!(username = %req.username, "weak password");
        return Err(ApiError::bad_request(WEAK_PASSWORD));
    }

    let existing = state
        .users
        .find_by_username(&req.username)
        .await
        .map_err(|e| ApiError::internal(REGISTER_FAILED, e))?;
    if existing.is_some() {
        warn!(username = %req.username, "username already exists");
        return Err(ApiError::bad_request("Username already exists"));
    }

    let new_user = NewUser::with_password(req.username, req.email, &req.password)
        .map_err(|e| ApiError::internal(REGISTER_FAILED, e))?;

    let user = match state.users.insert(new_user).await {
        Ok(u) => u,
        Err(InsertUserError::Duplicate) => {
            warn!("username claimed concurrently");
            return Err(ApiError::bad_request("Username already exists"));
        }
        Err(InsertUserError::Other(e)) => return Err(ApiError::internal(REGISTER_FAILED, e)),
    };

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully",
        }),
    ))
}

#[instrument(skip(state, req))]
pub async fn login(
    State(state): State<AppState>,
    Args(req): Args<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = match state.users.find_by_username(&req.username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %req.username, "login unknown username");
            return Err(ApiError::Unauthorized);
        }
        Err(e) => return Err(ApiError::internal(LOGIN_FAILED, e)),
    };

    match user.check_password(&req.password) {
        Ok(()) => {}
        Err(PasswordError::Mismatch) => {
            warn!(username = %req.username, user_id = %user.id, "login invalid password");
            return Err(ApiError::Unauthorized);
        }
        Err(e) => return Err(ApiError::internal(LOGIN_FAILED, e)),
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys
        .sign_access(user.id)
        .map_err(|e| ApiError::internal(LOGIN_FAILED, e))?;

    let questions = state
        .questions
        .latest()
        .await
        .map_err(|e| ApiError::internal(LOGIN_FAILED, e))?
        .ok_or_else(|| {
            ApiError::internal(
                "No questions available",
                anyhow::anyhow!("questions collection is empty"),
            )
        })?;

    info!(user_id = %user.id, username = %user.username, version = questions.version, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        access_token,
        message: "Login successful",
        questions: questions.into_payload(),
    }))
}
